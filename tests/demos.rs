use {
    demos::{
        call_sequence, dispatch,
        dispatch::Variant,
        jump_table::{self, Selection},
        recursion::recurse,
    },
    rstest::rstest,
};

fn capture(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut output = Vec::new();
    f(&mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[rstest]
#[case(1, "Option 1 selected\n")]
#[case(2, "Option 2 selected\n")]
#[case(3, "Option 3 selected\n")]
#[case(4, "Option 4 selected\n")]
#[case(0, "Invalid option\n")]
#[case(5, "Invalid option\n")]
#[case(-1, "Invalid option\n")]
#[case(i32::MAX, "Invalid option\n")]
#[case(i32::MIN, "Invalid option\n")]
fn jump_table_message(#[case] option: i32, #[case] expected: &str) {
    assert_eq!(capture(|out| jump_table::run(option, out)), expected);
}

#[rstest]
#[case(1, Selection::Option1)]
#[case(4, Selection::Option4)]
#[case(1000, Selection::Invalid)]
fn selection_from_option(#[case] option: i32, #[case] expected: Selection) {
    assert_eq!(Selection::from(option), expected);
}

#[rstest]
#[case(5, 15)]
#[case(1, 1)]
#[case(0, 0)]
#[case(-3, 0)]
#[case(i32::MIN, 0)]
fn recurse_values(#[case] n: i32, #[case] expected: i32) {
    assert_eq!(recurse(n), expected);
}

#[test]
fn recurse_matches_closed_form() {
    for n in 1..=1000 {
        assert_eq!(recurse(n), n * (n + 1) / 2, "n = {n}");
    }
}

#[test]
fn dispatch_runs_each_variant_once_in_order() {
    assert_eq!(
        capture(|out| dispatch::run(out)),
        "Executing DerivedA\nExecuting DerivedB\nExecuting DerivedC\n"
    );
}

#[rstest]
#[case(Variant::A, "Executing DerivedA\n")]
#[case(Variant::B, "Executing DerivedB\n")]
#[case(Variant::C, "Executing DerivedC\n")]
fn variant_executes_only_its_own_behavior(#[case] variant: Variant, #[case] expected: &str) {
    assert_eq!(capture(|out| variant.execute(out)), expected);
    assert_eq!(expected, format!("Executing {variant}\n"));
}

#[test]
fn call_sequence_order() {
    assert_eq!(
        capture(|out| call_sequence::run(out)),
        "Function One\nFunction Two\nFunction Three\n"
    );
}
