//! Scenario tests that script whole battles with pinned token stats, the way
//! the resolver policy is meant to play out over multiple rounds.

use titan_arena::game::types::{Address, BattleStatus, Move};
use titan_arena::game::{GameError, GameState};

fn setup_battle(creator_attack: u32, joiner_attack: u32) -> (GameState, Address, Address) {
    let mut gs = GameState::with_seed(Address::from("0xowner"), "uri://meta/".to_string(), 5);
    let creator = Address::from("0xcreator");
    let joiner = Address::from("0xjoiner");
    gs.register_player(&creator, "Creator", "Creator Token")
        .expect("creator registration failed");
    gs.register_player(&joiner, "Joiner", "Joiner Token")
        .expect("joiner registration failed");
    gs.override_token_stats(&creator, creator_attack)
        .expect("stat override failed");
    gs.override_token_stats(&joiner, joiner_attack)
        .expect("stat override failed");
    gs.create_battle(&creator, "Scripted Battle").expect("create failed");
    gs.join_battle(&joiner, "Scripted Battle").expect("join failed");
    (gs, creator, joiner)
}

fn play_round(
    gs: &mut GameState,
    creator: &Address,
    joiner: &Address,
    m0: Move,
    m1: Move,
) -> BattleStatus {
    gs.submit_move(creator, "Scripted Battle", m0.code())
        .expect("creator move failed");
    gs.submit_move(joiner, "Scripted Battle", m1.code())
        .expect("joiner move failed");
    gs.resolve_battle(creator, "Scripted Battle")
        .expect("resolution failed")
        .status
}

#[test]
fn relentless_attacker_grinds_down_a_defender() {
    // Creator 9/1 attacking into joiner 5/5 defending: 2 damage per round,
    // so the joiner's 10 health is gone after exactly 5 rounds.
    let (mut gs, creator, joiner) = setup_battle(9, 5);

    for round in 1..=4u32 {
        let status = play_round(&mut gs, &creator, &joiner, Move::Attack, Move::Defend);
        assert_eq!(
            status,
            BattleStatus::Started,
            "round {round} should not end the battle"
        );
        let health = gs.get_player(&joiner).expect("missing").health;
        assert_eq!(health, 10 - 2 * round);
    }

    let status = play_round(&mut gs, &creator, &joiner, Move::Attack, Move::Defend);
    assert_eq!(status, BattleStatus::Ended);

    let battle = gs.get_battle("Scripted Battle").expect("missing");
    assert_eq!(battle.winner, creator);
    // Final round's moves stay on record.
    assert_eq!(battle.moves, [Move::Attack.code(), Move::Defend.code()]);

    let creator_data = gs.get_player(&creator).expect("missing");
    let joiner_data = gs.get_player(&joiner).expect("missing");
    assert_eq!(joiner_data.health, 0);
    assert_eq!(creator_data.health, 10, "a pure defender never lands a hit");
    assert!(!creator_data.in_battle);
    assert!(!joiner_data.in_battle);
    assert!(joiner_data.mana > 25, "five successful blocks accumulate mana");
    assert!(creator_data.mana < 25, "five attacks cost mana");
}

#[test]
fn mutual_attacks_end_in_a_deterministic_tiebreak() {
    // With defense = 10 - attack, attack-vs-attack damage is symmetric:
    // both sides lose 9 + 5 - 10 = 4 per round and hit zero together in
    // round three. The tie goes to the stronger attacker.
    let (mut gs, creator, joiner) = setup_battle(9, 5);

    for _ in 0..2 {
        let status = play_round(&mut gs, &creator, &joiner, Move::Attack, Move::Attack);
        assert_eq!(status, BattleStatus::Started);
    }
    assert_eq!(gs.get_player(&creator).expect("missing").health, 2);
    assert_eq!(gs.get_player(&joiner).expect("missing").health, 2);

    let status = play_round(&mut gs, &creator, &joiner, Move::Attack, Move::Attack);
    assert_eq!(status, BattleStatus::Ended);

    let battle = gs.get_battle("Scripted Battle").expect("missing");
    assert_eq!(battle.winner, creator, "tie breaks toward the higher attack");
    assert_eq!(gs.get_player(&creator).expect("missing").health, 0);
    assert_eq!(gs.get_player(&joiner).expect("missing").health, 0);
}

#[test]
fn weak_attacks_into_guard_stall_forever() {
    // 3 attack against 7 + 2 guarded defense never connects; nothing ends.
    let (mut gs, creator, joiner) = setup_battle(3, 3);
    for _ in 0..6 {
        let status = play_round(&mut gs, &creator, &joiner, Move::Attack, Move::Defend);
        assert_eq!(status, BattleStatus::Started);
        assert_eq!(gs.get_player(&joiner).expect("missing").health, 10);
    }
    // No expiry anywhere: the battle just waits for more moves.
    assert_eq!(
        gs.battle_state("Scripted Battle").expect("missing"),
        BattleStatus::Started
    );
}

#[test]
fn players_are_free_again_after_a_battle_ends() {
    let (mut gs, creator, joiner) = setup_battle(9, 5);
    for _ in 0..5 {
        play_round(&mut gs, &creator, &joiner, Move::Attack, Move::Defend);
    }
    assert_eq!(
        gs.battle_state("Scripted Battle").expect("missing"),
        BattleStatus::Ended
    );

    // Both may mint again and start fresh battles.
    gs.mint_token(&creator, "Fresh Token").expect("mint failed");
    gs.create_battle(&joiner, "Rematch").expect("rematch create failed");
    gs.join_battle(&creator, "Rematch").expect("rematch join failed");

    // The ended battle record is permanent and rejects further play.
    assert_eq!(
        gs.submit_move(&creator, "Scripted Battle", 1),
        Err(GameError::InvalidState)
    );
    let ended = gs.get_battle("Scripted Battle").expect("missing");
    assert_eq!(ended.status, BattleStatus::Ended);
    assert_eq!(ended.winner, creator);
}

#[test]
fn mana_never_goes_below_zero_over_a_long_fight() {
    // Two weak attackers (1/9) deal no damage but keep paying mana; the
    // balance bottoms out at zero instead of underflowing.
    let (mut gs, creator, joiner) = setup_battle(1, 1);
    for _ in 0..12 {
        let status = play_round(&mut gs, &creator, &joiner, Move::Attack, Move::Attack);
        assert_eq!(status, BattleStatus::Started);
    }
    assert_eq!(gs.get_player(&creator).expect("missing").mana, 0);
    assert_eq!(gs.get_player(&joiner).expect("missing").mana, 0);
    assert_eq!(gs.get_player(&creator).expect("missing").health, 10);
}
