//! Line formatting tests.
use hoststats::types::{format_line, MetricKind, MetricValue};

#[test]
fn labels_are_fixed() {
    assert_eq!(MetricKind::Cpu.label(), "CPU usage:");
    assert_eq!(MetricKind::Ram.label(), "RAM usage:");
    assert_eq!(MetricKind::Pid.label(), "Total PIDs:");
}

#[test]
fn line_shape_matches_contract() {
    let line = format_line(MetricKind::Cpu, MetricValue::Percent(3.2), "09:15:42");
    assert_eq!(line, "09:15:42 CPU usage: 3.2");

    let line = format_line(MetricKind::Ram, MetricValue::Bytes(8_232_341_504), "14:03:21");
    assert_eq!(line, "14:03:21 RAM usage: 8232341504");

    let line = format_line(MetricKind::Pid, MetricValue::Count(412), "23:59:59");
    assert_eq!(line, "23:59:59 Total PIDs: 412");
}

#[test]
fn cpu_renders_one_decimal() {
    let zero = format_line(MetricKind::Cpu, MetricValue::Percent(0.0), "00:00:00");
    assert_eq!(zero, "00:00:00 CPU usage: 0.0");

    let full = format_line(MetricKind::Cpu, MetricValue::Percent(100.0), "00:00:00");
    assert_eq!(full, "00:00:00 CPU usage: 100.0");
}

#[test]
fn formatting_is_deterministic() {
    let a = format_line(MetricKind::Ram, MetricValue::Bytes(1024), "12:00:00");
    let b = format_line(MetricKind::Ram, MetricValue::Bytes(1024), "12:00:00");
    assert_eq!(a.as_bytes(), b.as_bytes());
}
