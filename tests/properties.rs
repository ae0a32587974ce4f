use arrayexpr::interpreter::{
    brackets::validate,
    evaluator::core::evaluate,
    extractor::extract,
    loader::load_values_str,
    symbols::SymbolTable,
};
use proptest::prelude::*;

/// Nesting check with a single stack holding both bracket kinds.
fn properly_nested(expr: &str) -> bool {
    let mut stack = Vec::new();
    for c in expr.chars() {
        match c {
            '(' | '[' => stack.push(c),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            },
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            },
            _ => {},
        }
    }
    stack.is_empty()
}

fn bracket_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['(', ')', '[', ']', 'a', '+']), 0..18)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Terms joined by `+` or `-`, each term a product of small integers.
fn sum_of_products() -> impl Strategy<Value = Vec<(bool, Vec<u32>)>> {
    prop::collection::vec((any::<bool>(), prop::collection::vec(1u32..10, 1..4)), 1..6)
}

fn render(terms: &[(bool, Vec<u32>)]) -> String {
    let mut out = String::new();
    for (i, (plus, factors)) in terms.iter().enumerate() {
        if i > 0 {
            out.push(if *plus { '+' } else { '-' });
        }
        let factors: Vec<String> = factors.iter().map(u32::to_string).collect();
        out.push_str(&factors.join("*"));
    }
    out
}

fn reference_value(terms: &[(bool, Vec<u32>)]) -> f64 {
    let mut total = 0.0;
    for (i, (plus, factors)) in terms.iter().enumerate() {
        let product: f64 = factors.iter().map(|&f| f64::from(f)).product();
        if i == 0 || *plus {
            total += product;
        } else {
            total -= product;
        }
    }
    total
}

proptest! {
    #[test]
    fn validation_accepts_exactly_proper_nesting(expr in bracket_soup()) {
        prop_assert_eq!(validate(&expr).is_ok(), properly_nested(&expr));
    }

    #[test]
    fn every_bracket_is_paired_once(expr in bracket_soup()) {
        if let Ok(map) = validate(&expr) {
            let brackets = expr.bytes().filter(|b| b"()[]".contains(b)).count();
            prop_assert_eq!(map.len() * 2, brackets);
            for &(open, close) in map.pairs() {
                prop_assert!(open < close);
                let pair = (expr.as_bytes()[open], expr.as_bytes()[close]);
                prop_assert!(pair == (b'(', b')') || pair == (b'[', b']'));
                let enclosed = expr[open + 1..close].bytes().filter(|b| b"()[]".contains(b)).count();
                prop_assert_eq!(enclosed % 2, 0);
            }
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition(terms in sum_of_products()) {
        let expr = render(&terms);
        prop_assert_eq!(evaluate(&expr, &SymbolTable::new()), Ok(reference_value(&terms)));
    }

    #[test]
    fn division_chains_fold_left(numbers in prop::collection::vec(1u32..50, 2..6)) {
        let expr = numbers.iter().map(u32::to_string).collect::<Vec<_>>().join("/");
        let expected = numbers[1..].iter().fold(f64::from(numbers[0]), |acc, &n| acc / f64::from(n));
        prop_assert_eq!(evaluate(&expr, &SymbolTable::new()), Ok(expected));
    }

    #[test]
    fn evaluation_is_idempotent(x in -100i32..100, i in 0usize..4, y in 1i32..20) {
        let expr = "x*A[i]-(x+A[A[i]])/y";
        let mut table = extract(expr);
        let values = format!("x {x}\ni {i}\ny {y}\nA 4 (0,3) (1,0) (2,1) (3,2)");
        load_values_str(&values, &mut table).unwrap();
        let snapshot = table.clone();

        let first = evaluate(expr, &table);
        let second = evaluate(expr, &table);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
        prop_assert_eq!(table, snapshot);
    }
}
