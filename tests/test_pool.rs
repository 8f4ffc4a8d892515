use space_shooter::pool::Pool;

fn pool_of(items: &[i32]) -> Pool<i32> {
    items.iter().copied().collect()
}

fn contents<T: Clone>(pool: &Pool<T>) -> Vec<T> {
    pool.iter().cloned().collect()
}

#[test]
fn spawn_appends_in_order() {
    let mut pool = Pool::new();
    assert!(pool.is_empty());
    pool.spawn(1);
    pool.spawn(2);
    pool.spawn(3);
    assert_eq!(pool.len(), 3);
    assert_eq!(contents(&pool), vec![1, 2, 3]);
}

#[test]
fn update_touches_every_member() {
    let mut pool = pool_of(&[1, 2, 3]);
    pool.update(|v| *v *= 10);
    assert_eq!(contents(&pool), vec![10, 20, 30]);
}

#[test]
fn prune_reports_removed_count_and_keeps_order() {
    let mut pool = pool_of(&[1, 2, 3, 4, 5, 6]);
    let removed = pool.prune(|v| v % 2 == 0);
    assert_eq!(removed, 3);
    assert_eq!(contents(&pool), vec![1, 3, 5]);

    assert_eq!(pool.prune(|_| false), 0);
    assert_eq!(pool.len(), 3);
}

#[test]
fn extract_returns_members_back_to_front() {
    let mut pool = pool_of(&[1, 2, 3, 4]);
    let taken = pool.extract(|v| *v > 1);
    assert_eq!(taken, vec![4, 3, 2]);
    assert_eq!(contents(&pool), vec![1]);
}

#[test]
fn recycle_resets_in_place_without_removing() {
    let mut pool = pool_of(&[5, 50, 7, 80]);
    let n = pool.recycle(|v| *v > 10, |v| *v = 0);
    assert_eq!(n, 2);
    assert_eq!(contents(&pool), vec![5, 0, 7, 0]);
}

#[test]
fn clear_empties_pool() {
    let mut pool = pool_of(&[1, 2]);
    pool.clear();
    assert!(pool.is_empty());
}

#[test]
fn pair_off_uses_each_member_once() {
    let mut shots = pool_of(&[10, 20]);
    let mut targets = pool_of(&[10, 10, 20]);

    let pairs = shots.pair_off(&mut targets, |a, b| a == b);

    assert_eq!(pairs, vec![(20, 20), (10, 10)]);
    assert!(shots.is_empty());
    assert_eq!(contents(&targets), vec![10]);
}

#[test]
fn pair_off_tolerates_other_side_running_out() {
    let mut shots = pool_of(&[1, 1, 1]);
    let mut targets = pool_of(&[1]);

    let pairs = shots.pair_off(&mut targets, |_, _| true);

    assert_eq!(pairs.len(), 1);
    assert_eq!(shots.len(), 2);
    assert!(targets.is_empty());
}

#[test]
fn pair_off_leaves_unmatched_members() {
    let mut shots = pool_of(&[1, 2, 3]);
    let mut targets = pool_of(&[2, 9]);

    let pairs = shots.pair_off(&mut targets, |a, b| a == b);

    assert_eq!(pairs, vec![(2, 2)]);
    assert_eq!(contents(&shots), vec![1, 3]);
    assert_eq!(contents(&targets), vec![9]);
}
