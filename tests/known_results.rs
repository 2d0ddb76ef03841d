use eternal_domination::eternal::assignment::is_feasible;
use eternal_domination::eternal::{eternal_domination_number, EternalDomination, Ruleset};
use eternal_domination::graph::Graph;
use eternal_domination::scenario::ResourceLimits;

#[test]
fn path3_one_guard_in_the_middle_steps_onto_either_attack() {
    let graph = Graph::path(3);
    let solved = EternalDomination::build(&graph, Ruleset::OneGuard, 1).unwrap();
    assert_eq!(solved.guards_answer(&[1], 0), Some(vec![0]));
    assert_eq!(solved.guards_answer(&[1], 2), Some(vec![2]));
}

#[test]
fn path3_one_guard_at_the_end_cannot_answer_the_far_attack() {
    let graph = Graph::path(3);
    let solved = EternalDomination::build(&graph, Ruleset::OneGuard, 1).unwrap();
    assert_eq!(solved.guards_answer(&[0], 2), None);
    assert_eq!(solved.rank_after_attack(&[0], 2), Some(1));
    // Attacking 2 wins at once, so the Attacker picks it.
    assert_eq!(solved.attacker_answer(&[0]), Some(2));
    assert_eq!(solved.rank_before_attack(&[0]), Some(2));
}

#[test]
fn cycle4_two_guards_many_moves_cover_the_attack() {
    let graph = Graph::cycle(4);
    let solved = EternalDomination::build(&graph, Ruleset::ManyGuards, 2).unwrap();
    let next = solved.guards_answer(&[0, 2], 1).unwrap();
    assert!(next.contains(&1));
    assert!(is_feasible(&graph, &[0, 2], &next));
    assert_ne!(next[0], next[1]);
    // Two guards hold C4 forever.
    assert!(!solved.is_attacker_win(&[0, 2]));
    assert_eq!(solved.attacker_answer(&[0, 2]), None);
}

#[test]
fn edgeless_graph_loses_every_attack() {
    let graph = Graph::empty(3);
    for ruleset in [Ruleset::OneGuard, Ruleset::ManyGuards] {
        let solved = EternalDomination::build(&graph, ruleset, 1).unwrap();
        for g in 0..3u16 {
            assert_eq!(solved.rank_before_attack(&[g]), Some(2));
            for a in (0..3u16).filter(|&a| a != g) {
                assert_eq!(solved.rank_after_attack(&[g], a), Some(1));
                assert_eq!(solved.guards_answer(&[g], a), None);
            }
        }
        assert_eq!(solved.safe_placements(), 0);
        assert_eq!(solved.summary().max_rank, Some(2));
    }
}

#[test]
fn invalid_queries_return_none() {
    let graph = Graph::path(4);
    let solved = EternalDomination::build(&graph, Ruleset::ManyGuards, 2).unwrap();
    // occupied attack, duplicate guards, wrong count, out of range
    assert_eq!(solved.guards_answer(&[0, 2], 2), None);
    assert_eq!(solved.guards_answer(&[1, 1], 2), None);
    assert_eq!(solved.guards_answer(&[1], 2), None);
    assert_eq!(solved.guards_answer(&[0, 2], 9), None);
    assert_eq!(solved.attacker_answer(&[0, 7]), None);
}

#[test]
fn guards_answer_keeps_the_callers_guard_order() {
    let graph = Graph::path(5);
    let solved = EternalDomination::build(&graph, Ruleset::OneGuard, 2).unwrap();
    // Guard 0 sits on 3, guard 1 on 1; only the guard on 1 is next to 0.
    assert_eq!(solved.guards_answer(&[3, 1], 0), Some(vec![3, 0]));
}

#[test]
fn one_guard_rule_needs_a_clique_cover() {
    let limits = ResourceLimits::default();
    let one_guard = |graph: Graph| {
        eternal_domination_number(&graph, Ruleset::OneGuard, &limits).unwrap()
    };
    // Paths and even cycles are perfect: the number is the clique cover number.
    assert_eq!(one_guard(Graph::path(3)), 2);
    assert_eq!(one_guard(Graph::path(6)), 3);
    assert_eq!(one_guard(Graph::cycle(6)), 3);
    assert_eq!(one_guard(Graph::biclique(2, 3)), 3);
}

#[test]
fn many_guards_rule_on_paths_and_cycles() {
    let limits = ResourceLimits::default();
    for n in 2..=7 {
        let k = eternal_domination_number(&Graph::path(n), Ruleset::ManyGuards, &limits).unwrap();
        assert_eq!(k, n.div_ceil(2), "path {n}");
    }
    for n in 3..=8 {
        let k = eternal_domination_number(&Graph::cycle(n), Ruleset::ManyGuards, &limits).unwrap();
        assert_eq!(k, n.div_ceil(3), "cycle {n}");
    }
}

#[test]
fn defended_positions_stay_defended() {
    // Play the arena's own answers against every attack sequence of length 6.
    let graph = Graph::cycle(6);
    let solved = EternalDomination::build(&graph, Ruleset::ManyGuards, 2).unwrap();
    let start = solved.safe_placement().unwrap();

    let mut frontier = vec![start];
    for _ in 0..6 {
        let mut next_frontier = Vec::new();
        for guards in &frontier {
            assert!(!solved.is_attacker_win(guards));
            for a in graph.vertices().filter(|a| !guards.contains(a)) {
                let next = solved.guards_answer(guards, a).unwrap();
                assert!(next.contains(&a));
                assert!(is_feasible(&graph, guards, &next));
                next_frontier.push(next);
            }
        }
        next_frontier.sort();
        next_frontier.dedup();
        frontier = next_frontier;
    }
}
