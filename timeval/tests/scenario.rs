use timeval::{ClockSource, FixedClock, Time};

#[test]
fn compare_and_accumulate() {
    let mut zero = Time::new(0, 0);
    let one = Time::new(1, 0);

    assert!(zero != one);
    assert!(zero < one);
    assert!(one > Time::new(0, 999_999));
    assert!(one < Time::new(1, 1));

    zero += one;
    assert!(zero == one);
}

// timestamps taken from a shared clock sort and render consistently
#[test]
fn timestamps_from_clock() {
    let clock = FixedClock::new(Time::new(1_699_999_999, 999_998));
    let mut stamps = Vec::new();

    for _ in 0..4 {
        stamps.push(clock.now());
        clock.advance(Time::new(0, 1));
    }

    let mut sorted = stamps.clone();
    sorted.sort();
    assert_eq!(sorted, stamps);

    let rendered: Vec<String> = stamps.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        rendered,
        [
            "001699999999.999998",
            "001699999999.999999",
            "001700000000.000000",
            "001700000000.000001",
        ]
    );

    for (stamp, text) in stamps.iter().zip(rendered.iter()) {
        assert_eq!(text.parse::<Time>().unwrap(), *stamp);
    }
}

#[test]
fn fixed_buffer() {
    let mut buf = [0u8; Time::FORMATTED_LEN];
    let text = Time::new(0, 999_999).format_into(&mut buf);
    assert_eq!(text, "000000000000.999999");
    assert_eq!(text.len(), Time::FORMATTED_LEN);
}
