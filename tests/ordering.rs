use heron_horn::{
    config::{Config, WorklistOrder},
    context::Context,
    reports::Report,
    structures::clause::HornClause,
};

use rand::{seq::SliceRandom, SeedableRng};

const NO_QUERIES: [HornClause; 0] = [];

fn kb() -> Vec<HornClause> {
    vec![
        HornClause::rule("B", ["A"]),
        HornClause::rule("C", ["B"]),
        HornClause::negated_rule("D", ["C"]),
        HornClause::rule("F", ["E", "C"]),
        HornClause::fact("A"),
        HornClause::fact("E"),
    ]
}

fn unsatisfiable_kb() -> Vec<HornClause> {
    let mut clauses = kb();
    clauses.push(HornClause::fact("D"));
    clauses
}

mod worklist_order {
    use super::*;

    #[test]
    fn the_verdict_and_partitions_are_order_independent() {
        let fifo = Config {
            worklist_order: WorklistOrder::Fifo,
        };
        let lifo = Config {
            worklist_order: WorklistOrder::Lifo,
        };

        for clauses in [kb(), unsatisfiable_kb()] {
            let first = Context::from_config(fifo.clone())
                .query(clauses.clone(), NO_QUERIES)
                .unwrap();
            let second = Context::from_config(lifo.clone())
                .query(clauses, NO_QUERIES)
                .unwrap();

            assert_eq!(first, second);
        }
    }

    #[test]
    fn a_satisfiable_chain_settles_the_same_either_way() {
        for order in [WorklistOrder::Fifo, WorklistOrder::Lifo] {
            let mut ctx = Context::from_config(Config {
                worklist_order: order,
            });
            assert!(ctx.query(kb(), NO_QUERIES).is_ok());

            assert_eq!(ctx.report(), Report::Satisfiable);
            for name in ["A", "B", "C", "E", "F"] {
                assert_eq!(ctx.value_of(name), Some(true), "{name} under {order}");
            }
            assert_eq!(ctx.value_of("D"), Some(false));
        }
    }
}

mod clause_order {
    use super::*;

    const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

    fn values_under(clauses: Vec<HornClause>) -> (Report, Vec<(String, Option<bool>)>) {
        let mut ctx = Context::from_config(Config::default());
        ctx.query(clauses, NO_QUERIES).unwrap();
        let values = NAMES
            .iter()
            .map(|name| (name.to_string(), ctx.value_of(name)))
            .collect();
        (ctx.report(), values)
    }

    #[test]
    fn shuffled_clauses_settle_the_same_atoms() {
        let (baseline_report, baseline_values) = values_under(kb());

        let mut rng = rand::rngs::StdRng::seed_from_u64(23);
        for _ in 0..16 {
            let mut shuffled = kb();
            shuffled.shuffle(&mut rng);

            let (report, values) = values_under(shuffled);
            assert_eq!(report, baseline_report);
            assert_eq!(values, baseline_values);
        }
    }

    #[test]
    fn shuffled_clauses_agree_on_unsatisfiability() {
        let (baseline_report, baseline_values) = values_under(unsatisfiable_kb());
        assert_eq!(baseline_report, Report::Unsatisfiable);

        let mut rng = rand::rngs::StdRng::seed_from_u64(29);
        for _ in 0..16 {
            let mut shuffled = unsatisfiable_kb();
            shuffled.shuffle(&mut rng);

            let (report, values) = values_under(shuffled);
            assert_eq!(report, baseline_report);
            assert_eq!(values, baseline_values);
        }
    }
}
