use heron_horn::{
    config::Config,
    context::Context,
    reports::Report,
    structures::clause::HornClause,
};

const NO_QUERIES: [HornClause; 0] = [];

/// A chain `a0`, `a0 → a1`, …, of the given length.
fn chain(length: usize) -> Vec<HornClause> {
    let mut clauses = vec![HornClause::fact("a0")];
    for index in 0..length {
        clauses.push(HornClause::rule(
            format!("a{}", index + 1),
            [format!("a{index}")],
        ));
    }
    clauses
}

mod chains {
    use super::*;

    #[test]
    fn a_long_chain_settles_every_link() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.query(chain(500), NO_QUERIES).is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.value_of("a0"), Some(true));
        assert_eq!(ctx.value_of("a250"), Some(true));
        assert_eq!(ctx.value_of("a500"), Some(true));
    }

    #[test]
    fn edge_visits_are_bounded_by_the_edge_count() {
        let length = 500;
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.query(chain(length), NO_QUERIES).is_ok());

        // One out-edge per chain atom but the last, plus the ⊤ edge of the fact.
        assert_eq!(ctx.graph.edge_count(), length + 1);
        assert_eq!(ctx.counters.edge_visits, length);
        assert!(ctx.counters.edge_visits <= ctx.graph.edge_count());
    }

    #[test]
    fn shared_heads_fire_once() {
        let mut ctx = Context::from_config(Config::default());

        let kb = [
            HornClause::fact("A"),
            HornClause::fact("B"),
            HornClause::rule("C", ["A"]),
            HornClause::rule("C", ["B"]),
            HornClause::rule("D", ["C"]),
        ];

        assert!(ctx.query(kb, NO_QUERIES).is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.value_of("C"), Some(true));
        assert_eq!(ctx.value_of("D"), Some(true));

        // C concludes twice over, but its out-edge is traversed once.
        assert_eq!(ctx.counters.edge_visits, 3);
        assert!(ctx.counters.edge_visits <= ctx.graph.edge_count());
    }
}
