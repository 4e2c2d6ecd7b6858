use super::*;

#[test]
fn format_clock_pads_two_digits() {
    assert_eq!(format_clock(9, 5), "09:05");
    assert_eq!(format_clock(23, 59), "23:59");
    assert_eq!(format_clock(0, 0), "00:00");
}

#[test]
fn utc_label_wraps_days() {
    assert_eq!(utc_label(0), "00:00");
    assert_eq!(utc_label(3_600 + 120), "01:02");
    assert_eq!(utc_label(86_400 + 45_000), "12:30");
}

#[test]
fn local_time_label_has_clock_shape() {
    let label = local_time_label();
    assert_eq!(label.len(), 5);
    assert_eq!(&label[2..3], ":");
}
