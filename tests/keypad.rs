use padcalc::{
    error::KeyError,
    evaluator::Operator,
    keypad::{Key, Keypad, KeypadConfig, Phase, Screen, parse_keys},
    run_keys,
    util::num::MAX_PRECISION,
};

fn keypad_after(script: &str) -> Keypad {
    let keys = parse_keys(script).unwrap_or_else(|e| panic!("Script {script:?} failed: {e}"));
    Keypad::default().press_all(keys)
}

fn assert_screen(script: &str, secondary: &str, primary: &str) {
    let keypad = keypad_after(script);
    assert_eq!(keypad.screen(), &Screen::new(secondary, primary), "script {script:?}");
}

#[test]
fn starts_fresh_with_placeholder() {
    let keypad = Keypad::default();
    assert_eq!(keypad.phase(), Phase::Fresh);
    assert_eq!(keypad.buffer(), "");
    assert_eq!(keypad.screen(), &Screen::new("", "0"));
}

#[test]
fn custom_placeholder_is_replaced_by_first_key() {
    let config = KeypadConfig { placeholder: Screen::new("45881699", "Calculator"),
                                ..KeypadConfig::default() };
    let keypad = Keypad::new(config);
    assert_eq!(keypad.screen(), &Screen::new("45881699", "Calculator"));

    let keypad = keypad.press(Key::Digit(7));
    assert_eq!(keypad.buffer(), "7");
    assert_eq!(keypad.phase(), Phase::Editing);
    assert_eq!(keypad.screen(), &Screen::new("7", "7"));
}

#[test]
fn digits_and_operators_echo_on_both_lines() {
    assert_screen("1 2 + 3", "12+3", "12+3");
    assert_screen("5+*3", "5+*3", "5+*3");
}

#[test]
fn operator_replaces_placeholder() {
    let keypad = keypad_after("- 5");
    assert_eq!(keypad.buffer(), "-5");
}

#[test]
fn second_decimal_in_segment_is_ignored() {
    assert_eq!(keypad_after("1 . . 2").buffer(), "1.2");
    assert_eq!(keypad_after("1.5+2.5").buffer(), "1.5+2.5");
    assert_eq!(keypad_after("1.5+2.5.").buffer(), "1.5+2.5");
}

#[test]
fn decimal_keeps_primary_line() {
    assert_screen("1 2 .", "12.", "12");
    assert_screen(".", ".", "0");
}

#[test]
fn delete_last_on_empty_buffer_is_noop() {
    let keypad = Keypad::default();
    let after = keypad.clone().press(Key::DeleteLast);
    assert_eq!(after, keypad);

    let keypad = keypad_after("5 C C C");
    assert_eq!(keypad.buffer(), "");
    assert_eq!(keypad.phase(), Phase::Editing);
}

#[test]
fn delete_last_trims_secondary_only() {
    assert_screen("1 2 3 C", "12", "123");
}

#[test]
fn delete_then_decimal_rechecks_segment() {
    assert_eq!(keypad_after("1 . C .").buffer(), "1.");
}

#[test]
fn clear_all_resets_to_zero() {
    let keypad = keypad_after("1 2 + 3 AC");
    assert_eq!(keypad.phase(), Phase::Fresh);
    assert_eq!(keypad.buffer(), "");
    assert_eq!(keypad.screen(), &Screen::new("", "0"));

    assert_eq!(keypad_after("1 2 AC 4").buffer(), "4");
}

#[test]
fn evaluate_shows_result() {
    let keypad = keypad_after("2+3*4=");
    assert_eq!(keypad.buffer(), "20");
    assert_eq!(keypad.phase(), Phase::Evaluated);
    assert_screen("2+3*4=", "20", "20");
    assert_screen("1/4=", "0.25", "0.25");
    assert_screen("1/3=", "0.3333333333333333", "0.3333333333");
}

#[test]
fn evaluate_empty_buffer_is_zero() {
    assert_screen("=", "0", "0");
}

#[test]
fn digit_after_result_starts_over() {
    let keypad = keypad_after("2+3= 7");
    assert_eq!(keypad.buffer(), "7");
    assert_eq!(keypad.phase(), Phase::Editing);

    assert_eq!(keypad_after("2+3= .").buffer(), ".");
}

#[test]
fn operator_after_result_continues() {
    let keypad = keypad_after("2+3= *2");
    assert_eq!(keypad.buffer(), "5*2");
    assert_eq!(keypad_after("2+3= *2=").buffer(), "10");
    assert_eq!(keypad_after("5-8= *2=").buffer(), "-6");
}

#[test]
fn delete_after_result_edits_it() {
    let keypad = keypad_after("12*2= C");
    assert_eq!(keypad.buffer(), "2");
    assert_eq!(keypad.phase(), Phase::Editing);
    assert_eq!(keypad_after("12*2= C 5").buffer(), "25");
}

#[test]
fn division_by_zero_shows_error_and_keeps_buffer() {
    let keypad = keypad_after("8/0=");
    assert_eq!(keypad.buffer(), "8/0");
    assert_eq!(keypad.phase(), Phase::Editing);
    assert_eq!(keypad.screen(), &Screen::new("8/0", "Error"));

    let keypad = keypad.press(Key::DeleteLast).press(Key::Digit(2)).press(Key::Evaluate);
    assert_eq!(keypad.buffer(), "4");
}

#[test]
fn parse_failure_shows_error() {
    assert_screen(". + 1 =", ".+1", "Error");
}

#[test]
fn error_text_and_precision_are_configurable() {
    let config = KeypadConfig { error_text: "Not a number".to_string(),
                                precision: 2,
                                ..KeypadConfig::default() };
    let screen = run_keys("1/0=", config.clone()).unwrap();
    assert_eq!(screen.primary, "Not a number");

    let screen = run_keys("2/3=", config).unwrap();
    assert_eq!(screen.primary, "0.67");
}

#[test]
fn key_labels() {
    assert_eq!("7".parse::<Key>().unwrap(), Key::Digit(7));
    assert_eq!("/".parse::<Key>().unwrap(), Key::Operator(Operator::Div));
    assert_eq!(".".parse::<Key>().unwrap(), Key::Decimal);
    assert_eq!("C".parse::<Key>().unwrap(), Key::DeleteLast);
    assert_eq!("AC".parse::<Key>().unwrap(), Key::ClearAll);
    assert_eq!("=".parse::<Key>().unwrap(), Key::Evaluate);
    assert_eq!("12".parse::<Key>(),
               Err(KeyError::UnknownKey { label: "12".to_string() }));

    for label in ["0", "9", "+", "-", "*", "/", ".", "C", "AC", "="] {
        assert_eq!(label.parse::<Key>().unwrap().to_string(), label);
    }
}

#[test]
fn digit_constructor_rejects_non_digits() {
    assert_eq!(Key::digit(9), Some(Key::Digit(9)));
    assert_eq!(Key::digit(10), None);
}

#[test]
fn parse_keys_reports_unknown_character() {
    assert_eq!(parse_keys("1 + (2)"),
               Err(KeyError::UnknownKey { label: "(".to_string() }));
    assert!(parse_keys("").unwrap().is_empty());
}

#[test]
fn result_keeps_full_precision_in_buffer() {
    assert_eq!(keypad_after("1/3= *3=").buffer(), "1");

    let keypad = keypad_after("1/3000000000000=");
    assert_eq!(keypad.screen().primary, "0");
    assert_eq!(keypad.buffer().parse::<f64>().unwrap(), 1.0 / 3_000_000_000_000.0);
}

#[test]
fn large_precision_is_capped() {
    let config = KeypadConfig { precision: 70_000,
                                ..KeypadConfig::default() };
    let screen = run_keys("1/2=", config).unwrap();
    assert_eq!(screen.primary, "0.5");

    let config = KeypadConfig::default().with_precision(usize::MAX);
    assert_eq!(config.precision, MAX_PRECISION);
    assert_eq!(run_keys("1/3=", config).unwrap().secondary, "0.3333333333333333");
}

#[test]
fn out_of_range_digit_is_ignored() {
    let keypad = keypad_after("1 2");
    let after = keypad.clone().press(Key::Digit(12));
    assert_eq!(after, keypad);
}

#[test]
fn command_line_config_is_applied() {
    let config = KeypadConfig::default().with_placeholder("ready")
                                        .with_error_text("Oops")
                                        .with_precision(3);
    assert_eq!(Keypad::new(config.clone()).screen(), &Screen::new("", "ready"));
    assert_eq!(run_keys("2/3=", config.clone()).unwrap(),
               Screen::new("0.6666666666666666", "0.667"));
    assert_eq!(run_keys("5/0=", config).unwrap(), Screen::new("5/0", "Oops"));
}
