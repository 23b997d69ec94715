use libconsole::console::args::*;

const BLANK: ArgPair = ArgPair {
    flag: '\0',
    value: 0,
};

fn pair(flag: char, value: i32) -> ArgPair {
    ArgPair { flag, value }
}

#[test]
fn test_flag_with_value_then_bare_flag() {
    let mut out = [BLANK; 4];
    let count = parse_args("-a 5 -b", &mut out, 4);

    assert_eq!(&out[..count], &[pair('a', 5), pair('b', NO_VALUE)]);
}

#[test]
fn test_flag_followed_by_flag_has_no_value() {
    let mut out = [BLANK; 4];
    let count = parse_args("-x -y 10", &mut out, 4);

    assert_eq!(&out[..count], &[pair('x', NO_VALUE), pair('y', 10)]);
}

#[test]
fn test_non_flag_tokens_are_skipped() {
    let mut out = [BLANK; 4];
    let count = parse_args("foo -z 3 bar", &mut out, 4);

    assert_eq!(&out[..count], &[pair('z', 3)]);
}

#[test]
fn test_max_args_limits_output() {
    let mut out = [BLANK; 4];
    let count = parse_args("-a 1 -b 2 -c 3", &mut out, 1);

    assert_eq!(count, 1);
    assert_eq!(out[0], pair('a', 1));
    assert_eq!(&out[1..], &[BLANK; 3]);
}

#[test]
fn test_output_slice_limits_output() {
    let mut out = [BLANK; 2];
    let count = parse_args("-a -b -c -d", &mut out, 8);

    assert_eq!(count, 2);
    assert_eq!(out, [pair('a', NO_VALUE), pair('b', NO_VALUE)]);
}

#[test]
fn test_zero_max_args() {
    let mut out = [BLANK; 2];
    assert_eq!(parse_args("-a 1", &mut out, 0), 0);
    assert_eq!(out, [BLANK; 2]);
}

#[test]
fn test_empty_and_blank_lines() {
    let mut out = [BLANK; 2];
    assert_eq!(parse_args("", &mut out, 2), 0);
    assert_eq!(parse_args(" \t  ", &mut out, 2), 0);
}

#[test]
fn test_trailing_dash_is_not_a_flag() {
    let mut out = [BLANK; 2];
    assert_eq!(parse_args("cmd -", &mut out, 2), 0);
    assert_eq!(parse_args("cmd - 4", &mut out, 2), 0);
}

#[test]
fn test_dash_followed_by_tab_is_not_a_flag() {
    let mut out = [BLANK; 2];
    assert_eq!(parse_args("-\t7", &mut out, 2), 0);
}

#[test]
fn test_tabs_separate_tokens() {
    let mut out = [BLANK; 4];
    let count = parse_args("cmd\t-n\t12\t-q", &mut out, 4);

    assert_eq!(&out[..count], &[pair('n', 12), pair('q', NO_VALUE)]);
}

#[test]
fn test_negative_value_is_read_as_flag() {
    let mut out = [BLANK; 4];
    let count = parse_args("-t -5", &mut out, 4);

    assert_eq!(&out[..count], &[pair('t', NO_VALUE), pair('5', NO_VALUE)]);
}

#[test]
fn test_explicit_plus_sign() {
    let mut out = [BLANK; 4];
    let count = parse_args("-o +7", &mut out, 4);

    assert_eq!(&out[..count], &[pair('o', 7)]);
}

#[test]
fn test_non_numeric_value_gets_sentinel() {
    let mut out = [BLANK; 4];
    let count = parse_args("-m fast -r 2", &mut out, 4);

    assert_eq!(&out[..count], &[pair('m', NO_VALUE), pair('r', 2)]);
}

#[test]
fn test_value_stops_at_non_digit() {
    let mut out = [BLANK; 4];
    let count = parse_args("-d 12ms -e", &mut out, 4);

    assert_eq!(&out[..count], &[pair('d', 12), pair('e', NO_VALUE)]);
}

#[test]
fn test_out_of_range_value_saturates() {
    let mut out = [BLANK; 2];
    let count = parse_args("-b 4294967296", &mut out, 2);

    assert_eq!(&out[..count], &[pair('b', i32::MAX)]);
}

#[test]
fn test_collect_args() {
    let args: heapless::Vec<ArgPair, 3> = collect_args("pwm -c 2 -d 75 -f 1000 -x");

    assert_eq!(args.len(), 3);
    assert_eq!(args[0], pair('c', 2));
    assert_eq!(args[1], pair('d', 75));
    assert_eq!(args[2], pair('f', 1000));
}

#[test]
fn test_args_iterator_matches_parse_args() {
    let line = "scan -t 30 -v  extra -c";
    let mut out = [BLANK; 8];
    let count = parse_args(line, &mut out, 8);

    let lazy: Vec<ArgPair> = Args::new(line).collect();
    assert_eq!(lazy.as_slice(), &out[..count]);
}

#[test]
fn test_arg_pair_value_helpers() {
    assert_eq!(pair('a', 0).value(), Some(0));
    assert_eq!(pair('a', -3).value(), Some(-3));
    assert_eq!(pair('a', NO_VALUE).value(), None);
    assert!(!pair('a', NO_VALUE).has_value());
}
