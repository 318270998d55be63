use proptest::prelude::*;

fn capture(greeting: &str) -> (i32, String) {
    let mut out = Vec::new();
    let code = greeter::run_with(["greeter", greeting], &mut out);
    (code, String::from_utf8(out).expect("utf-8 output"))
}

proptest! {
    #[test]
    fn any_word_is_greeted(word in "[A-Za-z0-9][A-Za-z0-9!?.]{0,15}") {
        let (code, out) = capture(&word);
        prop_assert_eq!(code, 0);
        prop_assert_eq!(out, format!("Hello {word}\n"));
    }

    #[test]
    fn identical_invocations_produce_identical_output(word in "[a-z]{1,12}") {
        prop_assert_eq!(capture(&word), capture(&word));
    }
}
