//! Line detector regression test
//!
//! Fixed scan order, free-cell seeding, called-number parsing, and the
//! strike-evaluation preconditions.
//!
//! Run with:
//! ```
//! cargo test -p bingovision-recog --test lines_reg
//! ```

use bingovision_grid::CellAddress;
use bingovision_recog::{
    CardState, Line, RecogError, detect, mark_matrix, parse_called_numbers, strike_all,
};

#[test]
fn full_card_reports_all_twelve_lines_in_scan_order() {
    let marked = [[true; 5]; 5];
    let report = detect(&marked);
    assert_eq!(report.count(), 12);
    let expected: Vec<Line> = (0..5)
        .map(Line::Row)
        .chain((0..5).map(Line::Col))
        .chain([Line::Diag(0), Line::Diag(1)])
        .collect();
    assert_eq!(report.lines, expected);
}

#[test]
fn free_cell_alone_is_no_line() {
    let mut marked = [[false; 5]; 5];
    marked[2][2] = true;
    assert_eq!(detect(&marked).count(), 0);
}

#[test]
fn single_row_is_exactly_one_line() {
    let mut marked = [[false; 5]; 5];
    marked[2] = [true; 5];
    let report = detect(&marked);
    assert_eq!(report.lines, vec![Line::Row(2)]);
    assert_eq!(report.count(), 1);
}

#[test]
fn diagonals_are_distinguished() {
    let mut marked = [[false; 5]; 5];
    for i in 0..5 {
        marked[i][i] = true;
    }
    assert_eq!(detect(&marked).lines, vec![Line::Diag(0)]);

    let mut marked = [[false; 5]; 5];
    for i in 0..5 {
        marked[i][4 - i] = true;
    }
    assert_eq!(detect(&marked).lines, vec![Line::Diag(1)]);
}

#[test]
fn called_number_parsing_trims_and_drops_empties() {
    assert_eq!(parse_called_numbers(" 7, 23 ,,45,  ,B "), vec!["7", "23", "45", "B"]);
    assert!(parse_called_numbers(" , ,").is_empty());
}

#[test]
fn mark_matrix_compares_trimmed_strings_exactly() {
    let mut card = CardState::default();
    card.set_value(CellAddress::new(0, 0).unwrap(), " 7 ");
    card.set_value(CellAddress::new(0, 1).unwrap(), "23");
    card.set_value(CellAddress::new(0, 2).unwrap(), "7b");
    let called = parse_called_numbers("7, 23, B");
    let marked = mark_matrix(&card, &called);
    assert!(marked[0][0]);
    assert!(marked[0][1]);
    assert!(!marked[0][2]);
    // Free cell pre-seeded.
    assert!(marked[2][2]);
    // Empty cells never match.
    assert!(!marked[4][4]);
}

#[test]
fn strike_preconditions_abort_before_processing() {
    let cards = vec![CardState::default()];
    assert!(matches!(strike_all(&cards, " , "), Err(RecogError::NoCalledNumbers)));
    assert!(matches!(strike_all(&[], "7"), Err(RecogError::NoCards)));
}

#[test]
fn strike_reports_per_card() {
    let mut winner = CardState::default();
    for (col, v) in ["7", "23", "45", "61", "12"].iter().enumerate() {
        winner.set_value(CellAddress::new(0, col).unwrap(), *v);
    }
    let loser = CardState::default();
    let reports = strike_all(&[winner, loser], "7, 23, 45, 61, 12").unwrap();
    assert_eq!(reports[0].lines, vec![Line::Row(0)]);
    assert!(!reports[1].has_bingo());
}
