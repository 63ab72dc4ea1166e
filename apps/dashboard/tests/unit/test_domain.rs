use dashboard::domain::{
    history::{HISTORY_CAPACITY, HistoryStore, RingBuffer},
    metrics::{Sample, ThresholdAdvisory, Utilization},
};

fn numbered(n: u32) -> Sample {
    Sample::new(Utilization::new(n as f32, 100.0 - n as f32), format!("12:00:{:02}", n))
}

#[test]
fn advisory_uses_strict_greater_than() {
    assert!(ThresholdAdvisory::evaluate(&Utilization::new(85.0, 10.0)).is_some());
    assert!(ThresholdAdvisory::evaluate(&Utilization::new(80.0, 80.0)).is_none());
    assert!(ThresholdAdvisory::evaluate(&Utilization::new(10.0, 10.0)).is_none());
}

#[test]
fn ring_buffer_reports_capacity() {
    let buf = RingBuffer::<Sample>::new(HISTORY_CAPACITY);
    assert_eq!(buf.capacity(), 10);
    assert!(buf.is_empty());
}

#[tokio::test]
async fn history_evicts_oldest_first() {
    let store = HistoryStore::new();
    for n in 1..=15 {
        store.record(numbered(n)).await;
    }

    let snap = store.snapshot().await;
    assert_eq!(snap.len(), HISTORY_CAPACITY);
    assert_eq!(snap.time.first().map(String::as_str), Some("12:00:06"));
    assert_eq!(snap.time.last().map(String::as_str), Some("12:00:15"));
    for (i, n) in (6..=15).enumerate() {
        assert_eq!(snap.cpu[i], n as f32);
        assert_eq!(snap.mem[i], 100.0 - n as f32);
    }
}

#[tokio::test]
async fn history_lengths_match_after_every_record() {
    let store = HistoryStore::new();
    for n in 1..=12 {
        store.record(numbered(n)).await;
        let snap = store.snapshot().await;
        assert_eq!(snap.cpu.len(), snap.time.len());
        assert_eq!(snap.mem.len(), snap.time.len());
        assert!(snap.len() <= HISTORY_CAPACITY);
    }
}
