use titan_arena::game::types::Address;
use titan_arena::game::{GameError, GameState};

fn new_game() -> GameState {
    GameState::with_seed(Address::from("0xowner"), "uri://meta/".to_string(), 42)
}

fn registered(gs: &mut GameState, addr: &str) -> Address {
    let address = Address::from(addr);
    gs.register_player(&address, "Player", "First Token")
        .expect("registration failed");
    address
}

#[test]
fn mint_requires_registration() {
    let mut gs = new_game();
    let stranger = Address::from("0xstranger");
    assert_eq!(
        gs.mint_token(&stranger, "Unregistered Token"),
        Err(GameError::Unregistered)
    );
    assert_eq!(gs.total_supply(), 0, "failed mint must not count");
    assert!(!gs.is_player_token(&stranger));
}

#[test]
fn every_mint_conserves_the_stat_budget() {
    let mut gs = new_game();
    let player = registered(&mut gs, "0xplayer1");
    for i in 0..32 {
        gs.mint_token(&player, &format!("Token {i}")).expect("mint failed");
    }
    for token in gs.all_tokens().iter().skip(1) {
        assert!(token.attack_strength <= 10);
        assert!(token.defense_strength <= 10);
        assert_eq!(token.attack_strength + token.defense_strength, 10);
    }
}

#[test]
fn seeded_games_roll_identical_stats() {
    let mut a = new_game();
    let mut b = new_game();
    let player = Address::from("0xplayer1");
    a.register_player(&player, "Player", "Token").expect("a failed");
    b.register_player(&player, "Player", "Token").expect("b failed");
    for _ in 0..8 {
        a.mint_token(&player, "Next").expect("a mint failed");
        b.mint_token(&player, "Next").expect("b mint failed");
    }
    assert_eq!(a.all_tokens(), b.all_tokens());
}

#[test]
fn minting_repoints_the_active_token() {
    let mut gs = new_game();
    let player = registered(&mut gs, "0xplayer1");
    assert_eq!(
        gs.get_player_token(&player).expect("missing").name,
        "First Token"
    );

    gs.mint_token(&player, "Second Token").expect("mint failed");
    assert_eq!(
        gs.get_player_token(&player).expect("missing").name,
        "Second Token"
    );
    // History keeps the first mint.
    let names: Vec<_> = gs.all_tokens().iter().map(|t| t.name.clone()).collect();
    assert!(names.contains(&"First Token".to_string()));
}

#[test]
fn supply_counts_exactly_one_per_successful_mint() {
    let mut gs = new_game();
    assert_eq!(gs.total_supply(), 0);
    let p1 = registered(&mut gs, "0xplayer1");
    assert_eq!(gs.total_supply(), 1);
    registered(&mut gs, "0xplayer2");
    registered(&mut gs, "0xplayer3");
    assert_eq!(gs.total_supply(), 3);
    gs.mint_token(&p1, "Token Four").expect("mint failed");
    assert_eq!(gs.total_supply(), 4);

    let sentinel = &gs.all_tokens()[0];
    assert_eq!(sentinel.name, "");
    assert_eq!(gs.all_tokens().len() as u64, gs.total_supply() + 1);
}

#[test]
fn minting_while_engaged_is_rejected() {
    let mut gs = new_game();
    let p1 = registered(&mut gs, "0xplayer1");
    let p2 = registered(&mut gs, "0xplayer2");
    gs.create_battle(&p1, "Test Battle").expect("create failed");
    gs.join_battle(&p2, "Test Battle").expect("join failed");

    let supply_before = gs.total_supply();
    assert_eq!(
        gs.mint_token(&p1, "Battle Token"),
        Err(GameError::ActiveBattleConflict)
    );
    assert_eq!(gs.total_supply(), supply_before);
    assert_ne!(
        gs.get_player_token(&p1).expect("missing").name,
        "Battle Token"
    );
}

#[test]
fn token_lookup_for_strangers_fails() {
    let gs = new_game();
    assert_eq!(
        gs.get_player_token(&Address::from("0xnobody")),
        Err(GameError::NotFound)
    );
    assert_eq!(
        gs.get_player_token(&Address::zero()),
        Err(GameError::NotFound)
    );
    assert!(!gs.is_player_token(&Address::zero()));
}
