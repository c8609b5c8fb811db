use super::*;

#[test]
fn memo_stores_and_overwrites_scores() {
    let mut table = MemoTable::new();
    assert_eq!(table.get(42), None);
    table.insert(42, 1234);
    assert_eq!(table.get(42), Some(1234));
    table.insert(42, -5);
    assert_eq!(table.get(42), Some(-5));
    assert_eq!(table.len(), 1);
}

#[test]
fn recent_positions_evict_oldest_first() {
    let mut recent = RecentPositions::new(50);
    for key in 0..60u64 {
        recent.push(key);
    }
    assert_eq!(recent.len(), 50);
    for key in 0..10u64 {
        assert!(!recent.contains(key), "oldest entries should be gone");
    }
    for key in 10..60u64 {
        assert!(recent.contains(key));
    }
}

#[test]
fn recent_positions_below_capacity_keep_everything() {
    let mut recent = RecentPositions::new(50);
    for key in 0..20u64 {
        recent.push(key);
    }
    assert_eq!(recent.len(), 20);
    assert!(recent.contains(0));
    assert!(recent.contains(19));
}
