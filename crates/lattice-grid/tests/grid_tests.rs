//! Grid projection tests: dimensions, index mapping and row refresh.

use std::sync::Arc;

use parking_lot::Mutex;

use lattice_grid::{
    CellPosition, DynamicGrid, GridConfig, GridError, SortedFilteredList, to_index, to_row_col,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("lattice_grid=trace")
        .with_test_writer()
        .try_init();
}

fn letters(n: usize) -> Arc<SortedFilteredList<char>> {
    Arc::new(('a'..='z').take(n).collect())
}

fn grid(source: Arc<SortedFilteredList<char>>, width: f64) -> DynamicGrid<char> {
    let config = GridConfig::default()
        .with_cell_width(100.0)
        .with_available_width(width);
    DynamicGrid::with_config(source, config).expect("valid config")
}

#[test]
fn test_ten_items_at_320_wide() {
    init_tracing();
    let mut grid = grid(letters(10), 320.0);

    assert_eq!(grid.column_count(), 3);
    assert_eq!(grid.row_count(), 4);
    assert_eq!(grid.to_row_col(4), CellPosition::new(1, 1));
    assert_eq!(grid.get(1, 1), Some('e'));
    assert_eq!(grid.get(3, 0), Some('j'));
    assert_eq!(grid.get(3, 1), None);
    assert_eq!(grid.get(3, 2), None);
}

#[test]
fn test_empty_source() {
    let mut grid = grid(letters(0), 320.0);

    assert!(grid.column_count() >= 1);
    assert_eq!(grid.row_count(), 0);
    assert_eq!(grid.item_count(), 0);
    for row in 0..3 {
        for column in 0..3 {
            assert_eq!(grid.get(row, column), None);
        }
    }

    grid.set_available_width(0.0);
    assert_eq!(grid.column_count(), 1);
}

#[test]
fn test_index_round_trip() {
    for columns in 1..=6 {
        for index in 0..40 {
            let position = to_row_col(index, columns).unwrap();
            assert_eq!(to_index(position, columns).unwrap(), index);
        }
    }
    assert_eq!(
        to_row_col(3, 0),
        Err(GridError::InvalidColumnCount { columns: 0 })
    );
}

#[test]
fn test_removal_refreshes_rows_from_removed_index() {
    init_tracing();
    let source = letters(10);
    let mut grid = grid(source.clone(), 320.0);

    let updated = Arc::new(Mutex::new(Vec::new()));
    let removed = Arc::new(Mutex::new(Vec::new()));
    let updated_clone = updated.clone();
    grid.signals()
        .rows_updated
        .connect(move |rows: &Vec<usize>| updated_clone.lock().push(rows.clone()));
    let removed_clone = removed.clone();
    grid.signals()
        .rows_removed
        .connect(move |&range| removed_clone.lock().push(range));

    source.remove(2);
    grid.process_pending();

    assert_eq!(grid.row_count(), 3);
    assert_eq!(*removed.lock(), vec![(3, 3)]);
    assert_eq!(*updated.lock(), vec![vec![0, 1, 2]]);
    assert_eq!(grid.get(0, 2), Some('d'));
}

#[test]
fn test_append_grows_rows() {
    let source = letters(9);
    let mut grid = grid(source.clone(), 320.0);
    let inserted = Arc::new(Mutex::new(Vec::new()));
    let inserted_clone = inserted.clone();
    grid.signals()
        .rows_inserted
        .connect(move |&range| inserted_clone.lock().push(range));

    grid.update_items(|items| items.push('z'));

    assert_eq!(grid.row_count(), 4);
    assert_eq!(*inserted.lock(), vec![(3, 3)]);
    assert_eq!(grid.get(3, 0), Some('z'));
    let tags: Vec<usize> = grid.rows().iter().map(|row| row.index()).collect();
    assert_eq!(tags, vec![0, 1, 2, 3]);
}

#[test]
fn test_row_generation_tracks_refresh() {
    let source = letters(6);
    let mut grid = grid(source.clone(), 320.0);
    assert_eq!(grid.get(1, 0), Some('d'));
    let before = grid.row(1).unwrap().generation();

    source.replace(3, 'D');
    assert_eq!(grid.get(1, 0), Some('D'));

    let row = grid.row(1).unwrap();
    assert!(row.generation() > before);
    assert_eq!(row.slot(0).and_then(|slot| slot.value()), Some(&'D'));
    // Row 0 holds no updated item.
    assert_eq!(grid.row(0).unwrap().generation(), 0);
}

#[test]
fn test_normalize_is_idempotent_through_width_changes() {
    let mut grid = grid(letters(10), 320.0);
    grid.set_available_width(420.0);
    assert_eq!(grid.column_count(), 4);
    assert_eq!(grid.row_count(), 3);

    grid.set_available_width(430.0);
    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.get(2, 1), Some('j'));
}

#[test]
fn test_scale_changes_column_count() {
    let mut grid = grid(letters(10), 800.0);
    assert_eq!(grid.column_count(), 8);

    grid.set_cell_width_scale(2.0).unwrap();

    assert_eq!(grid.column_count(), 4);
    assert!(grid.columns().iter().all(|column| column.width == 200.0));
    assert_eq!(grid.cell_width_scale(), 2.0);
}

#[test]
fn test_sorted_view_reflows() {
    let source = Arc::new(SortedFilteredList::new(vec![5, 3, 9, 1]));
    let config = GridConfig::default()
        .with_cell_width(50.0)
        .with_available_width(100.0);
    let mut grid = DynamicGrid::with_config(source.clone(), config).unwrap();
    assert_eq!(grid.get(0, 0), Some(5));

    source.sort_by_key(|n| *n);

    assert_eq!(grid.get(0, 0), Some(1));
    assert_eq!(grid.get(0, 1), Some(3));
    assert_eq!(grid.get(1, 1), Some(9));
}
