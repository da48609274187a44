use mystic_chess::move_generation::perft::perft;
use mystic_chess::utils::fen::parse_fen;

fn nodes(fen: &str, depth: u8) -> usize {
    let game = parse_fen(fen).expect("FEN should parse");
    perft(&game, depth).expect("perft should run").nodes
}

#[test]
fn castling_heavy_middlegame() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    assert_eq!(nodes(fen, 1), 48);
    assert_eq!(nodes(fen, 2), 2039);

    let game = parse_fen(fen).expect("FEN should parse");
    let counts = perft(&game, 1).expect("perft should run");
    assert_eq!(counts.castles, 2);
    assert_eq!(counts.captures, 8);
}

#[test]
fn en_passant_pins_in_a_rook_ending() {
    let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    assert_eq!(nodes(fen, 1), 14);
    assert_eq!(nodes(fen, 2), 191);
    assert_eq!(nodes(fen, 3), 2812);
}

#[test]
fn quiet_symmetrical_middlegame() {
    let fen = "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10";
    assert_eq!(nodes(fen, 1), 46);
    assert_eq!(nodes(fen, 2), 2079);
}
