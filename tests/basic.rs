use heron_horn::{
    config::Config,
    context::Context,
    reports::Report,
    structures::clause::HornClause,
};

const NO_QUERIES: [HornClause; 0] = [];

mod facts {
    use super::*;

    #[test]
    fn a_fact_holds() {
        let mut ctx = Context::from_config(Config::default());

        let result = ctx.query([HornClause::fact("A")], NO_QUERIES);

        assert!(result.is_ok());
        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.value_of("A"), Some(true));
    }

    #[test]
    fn a_lone_negated_fact_settles_false() {
        let mut ctx = Context::from_config(Config::default());

        let result = ctx.query([HornClause::negated_fact("C")], NO_QUERIES);

        assert!(result.is_ok());
        assert!(result.unwrap().satisfiable());
        assert_eq!(ctx.value_of("C"), Some(false));
    }
}

mod rules {
    use super::*;

    #[test]
    fn a_rule_fires_when_its_body_holds() {
        let mut ctx = Context::from_config(Config::default());

        let kb = [
            HornClause::fact("A"),
            HornClause::fact("B"),
            HornClause::rule("C", ["A", "B"]),
        ];

        let result = ctx.query(kb, NO_QUERIES).unwrap();

        assert_eq!(result.report(), Report::Satisfiable);
        assert!(result.unsatisfied().is_empty());
        assert_eq!(result.satisfied().len(), 3);
        assert_eq!(ctx.value_of("C"), Some(true));
    }

    #[test]
    fn a_rule_waits_on_a_partial_body() {
        let mut ctx = Context::from_config(Config::default());

        let kb = [HornClause::fact("A"), HornClause::rule("C", ["A", "B"])];

        let result = ctx.query(kb, NO_QUERIES).unwrap();

        assert!(result.satisfiable());
        assert_eq!(ctx.value_of("A"), Some(true));
        assert_eq!(ctx.value_of("B"), None);
        assert_eq!(ctx.value_of("C"), None);
    }
}

mod violations {
    use super::*;

    #[test]
    fn an_established_constraint_body_is_a_violation() {
        let mut ctx = Context::from_config(Config::default());

        let kb = [
            HornClause::fact("A"),
            HornClause::fact("C"),
            HornClause::negated_rule("C", ["A"]),
        ];

        let result = ctx.query(kb, NO_QUERIES).unwrap();

        assert_eq!(result.report(), Report::Unsatisfiable);
        assert_eq!(result.unsatisfied().len(), 1);
        assert!(result.unsatisfied()[0].positive().is_none());

        let c = ctx.atom_db.internal_representation("C").unwrap();
        assert_eq!(result.inconsistencies().len(), 1);
        assert_eq!(result.inconsistencies()[0][0].atom(), c);
    }

    #[test]
    fn a_queried_negation_of_a_derived_atom_is_a_minimal_pair() {
        let mut ctx = Context::from_config(Config::default());

        let result = ctx
            .query([HornClause::fact("X")], [HornClause::negated_fact("X")])
            .unwrap();

        assert_eq!(result.report(), Report::Unsatisfiable);

        let x = ctx.atom_db.internal_representation("X").unwrap();
        assert_eq!(result.inconsistencies().len(), 1);

        let [positive, negative] = result.inconsistencies()[0];
        assert_eq!(positive.atom(), x);
        assert!(positive.polarity());
        assert_eq!(negative.atom(), x);
        assert!(!negative.polarity());

        // The atom carries no value once both polarities are required.
        assert_eq!(result.value_of(x), None);
    }

    #[test]
    fn a_derivation_against_a_constraint() {
        let mut ctx = Context::from_config(Config::default());

        let kb = [
            HornClause::rule("B", ["A"]),
            HornClause::negated_rule("C", ["B"]),
        ];
        let queries = [HornClause::fact("A"), HornClause::fact("C")];

        let result = ctx.query(kb, queries).unwrap();

        assert_eq!(result.report(), Report::Unsatisfiable);
        assert_eq!(result.unsatisfied().len(), 1);
        assert!(result.unsatisfied()[0].positive().is_none());

        // The derivation B and the violated constraint's expectation ¬B form the pair.
        let b = ctx.atom_db.internal_representation("B").unwrap();
        assert_eq!(result.inconsistencies().len(), 1);
        assert_eq!(result.inconsistencies()[0][0].atom(), b);

        // The assumed facts keep their values.
        assert_eq!(ctx.value_of("A"), Some(true));
        assert_eq!(ctx.value_of("C"), Some(true));
        assert_eq!(ctx.value_of("B"), None);
    }
}

mod determinism {
    use super::*;

    fn kb() -> Vec<HornClause> {
        vec![
            HornClause::fact("A"),
            HornClause::rule("B", ["A"]),
            HornClause::rule("D", ["B", "C"]),
            HornClause::negated_rule("E", ["B"]),
        ]
    }

    #[test]
    fn repeated_queries_agree() {
        let mut ctx = Context::from_config(Config::default());

        let first = ctx.query(kb(), NO_QUERIES).unwrap();
        let second = ctx.query(kb(), NO_QUERIES).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn fresh_contexts_agree() {
        let mut first_ctx = Context::from_config(Config::default());
        let mut second_ctx = Context::from_config(Config::default());

        let first = first_ctx.query(kb(), NO_QUERIES).unwrap();
        let second = second_ctx.query(kb(), NO_QUERIES).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_clauses_are_one_entity() {
        let mut ctx = Context::from_config(Config::default());

        let kb = [
            HornClause::rule("C", ["A", "B"]),
            HornClause::rule("C", ["A", "B"]),
            HornClause::fact("A"),
            HornClause::fact("B"),
        ];

        let result = ctx.query(kb, NO_QUERIES).unwrap();

        assert_eq!(ctx.clause_db.count(), 3);
        assert_eq!(result.satisfied().len(), 3);
        assert_eq!(ctx.value_of("C"), Some(true));
    }
}

mod updates {
    use super::*;

    #[test]
    fn an_update_takes_part_in_the_next_inference() {
        let mut ctx = Context::from_config(Config::default());

        let result = ctx.query([HornClause::rule("B", ["A"])], NO_QUERIES).unwrap();
        assert!(result.satisfiable());
        assert_eq!(ctx.value_of("B"), None);

        assert!(ctx.update(HornClause::fact("A")).is_ok());
        assert_eq!(ctx.report(), Report::Unknown);

        let result = ctx.infer().unwrap();
        assert!(result.satisfiable());
        assert_eq!(ctx.value_of("A"), Some(true));
        assert_eq!(ctx.value_of("B"), Some(true));
    }

    #[test]
    fn an_update_of_an_enrolled_clause_changes_nothing() {
        let mut ctx = Context::from_config(Config::default());

        let kb = [HornClause::fact("A"), HornClause::rule("B", ["A"])];
        assert!(ctx.query(kb, NO_QUERIES).is_ok());
        assert_eq!(ctx.report(), Report::Satisfiable);

        assert!(ctx.update(HornClause::fact("A")).is_ok());
        assert_eq!(ctx.clause_db.count(), 2);
        assert_eq!(ctx.report(), Report::Satisfiable);
    }
}

mod refinement {
    use super::*;

    #[test]
    fn a_constraint_with_an_established_body_settles_its_head() {
        let mut ctx = Context::from_config(Config::default());

        let kb = [
            HornClause::fact("A"),
            HornClause::negated_rule("C", ["A"]),
        ];

        let result = ctx.query(kb, NO_QUERIES).unwrap();

        assert!(result.satisfiable());
        assert_eq!(ctx.value_of("A"), Some(true));
        assert_eq!(ctx.value_of("C"), Some(false));
    }

    #[test]
    fn closure_is_idempotent() {
        let mut ctx = Context::from_config(Config::default());

        let kb = [
            HornClause::fact("A"),
            HornClause::rule("B", ["A"]),
            HornClause::negated_rule("C", ["B"]),
        ];

        let first = ctx.query(kb, NO_QUERIES).unwrap();

        ctx.close_maximal();
        let passes = ctx.counters.refinement_passes;
        ctx.close_maximal();

        assert!(ctx.counters.refinement_passes > passes);
        assert_eq!(first.assignment().to_vec(), {
            let again = ctx.infer().unwrap();
            again.assignment().to_vec()
        });
    }
}
