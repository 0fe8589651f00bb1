use super::*;
use crate::grid::Layout;

fn standard() -> &'static GridShape {
    Layout::Standard.shape()
}

// -----------------------------------------------------------------------
// format_code
// -----------------------------------------------------------------------

#[test]
fn format_code_cell_only() {
    assert_eq!(format_code(RowCode::A, 3, None), "A-3");
}

#[test]
fn format_code_with_spot() {
    assert_eq!(format_code(RowCode::I, 2, Some(7)), "I-2-7");
}

#[test]
fn format_code_does_not_validate() {
    assert_eq!(format_code(RowCode::G, 9, Some(12)), "G-9-12");
}

// -----------------------------------------------------------------------
// parse_location_input
// -----------------------------------------------------------------------

#[test]
fn parse_hyphenated_compact_and_lowercase_agree() {
    let expected = Coordinate::new(RowCode::I, 2, Some(7));
    for raw in ["I-2-7", "I27", "i-2-7", "  i27 "] {
        assert_eq!(
            parse_location_input(raw, standard()),
            Ok(expected),
            "input {raw:?}"
        );
    }
}

#[test]
fn parse_cell_only() {
    assert_eq!(
        parse_location_input("b-4", standard()),
        Ok(Coordinate::new(RowCode::B, 4, None))
    );
    assert_eq!(
        parse_location_input("B4", standard()),
        Ok(Coordinate::new(RowCode::B, 4, None))
    );
}

#[test]
fn parse_empty_input() {
    assert_eq!(
        parse_location_input("", standard()),
        Err(LocationError::EmptyInput)
    );
    assert_eq!(
        parse_location_input("   \t", standard()),
        Err(LocationError::EmptyInput)
    );
}

#[test]
fn parse_unknown_row_letter() {
    let err = parse_location_input("Z-1", standard()).unwrap_err();
    assert!(matches!(err, LocationError::InvalidRow { row: 'Z', .. }));
    assert!(err.to_string().contains("I, A, B, C, D, E, F, G"));
}

#[test]
fn parse_row_h_depends_on_layout() {
    assert!(matches!(
        parse_location_input("H-1", standard()),
        Err(LocationError::InvalidRow { row: 'H', .. })
    ));
    assert_eq!(
        parse_location_input("H-1", Layout::Extended.shape()),
        Ok(Coordinate::new(RowCode::H, 1, None))
    );
}

#[test]
fn parse_rejects_unrecognised_shapes() {
    for raw in ["I", "I-", "I--2", "I-2-", "I-2-3-4", "12", "-I-2", "I 2 7", "I123", "I-A"] {
        assert_eq!(
            parse_location_input(raw, standard()),
            Err(LocationError::InvalidFormat),
            "input {raw:?}"
        );
    }
}

#[test]
fn parse_aisle_out_of_range() {
    assert_eq!(
        parse_location_input("I-99", standard()),
        Err(LocationError::InvalidAisle { max: 9 })
    );
    assert_eq!(
        parse_location_input("I-0", standard()),
        Err(LocationError::InvalidAisle { max: 9 })
    );
    assert_eq!(
        parse_location_input("I05", standard()),
        Err(LocationError::InvalidAisle { max: 9 })
    );
}

#[test]
fn parse_aisle_overflow_is_invalid_aisle() {
    assert_eq!(
        parse_location_input("I-99999999999999999999", standard()),
        Err(LocationError::InvalidAisle { max: 9 })
    );
}

#[test]
fn parse_aisle_checked_before_spot() {
    assert_eq!(
        parse_location_input("I-10-10", standard()),
        Err(LocationError::InvalidAisle { max: 9 })
    );
}

#[test]
fn parse_spot_out_of_range() {
    assert_eq!(
        parse_location_input("I-2-10", standard()),
        Err(LocationError::InvalidSpot { max: 9 })
    );
    assert_eq!(
        parse_location_input("I20", standard()),
        Err(LocationError::InvalidSpot { max: 9 })
    );
}

#[test]
fn parse_extended_layout_accepts_ten() {
    let shape = Layout::Extended.shape();
    assert_eq!(
        parse_location_input("I-10-10", shape),
        Ok(Coordinate::new(RowCode::I, 10, Some(10)))
    );
    assert_eq!(
        parse_location_input("I-11", shape),
        Err(LocationError::InvalidAisle { max: 10 })
    );
}

#[test]
fn parse_skips_footprint_check() {
    assert_eq!(
        parse_location_input("G-9", standard()),
        Ok(Coordinate::new(RowCode::G, 9, None))
    );
    assert!(!standard().is_valid_location(RowCode::G, 9));
}

#[test]
fn parse_round_trips_every_valid_location() {
    let shape = standard();
    for (row, aisle) in shape.cells() {
        for spot in std::iter::once(None).chain((1..=shape.spot_count()).map(Some)) {
            let code = format_code(row, aisle, spot);
            assert_eq!(
                parse_location_input(&code, shape),
                Ok(Coordinate::new(row, aisle, spot)),
                "code {code}"
            );
        }
    }
}

// -----------------------------------------------------------------------
// resolve_location / from_grid
// -----------------------------------------------------------------------

#[test]
fn resolve_rejects_cell_outside_footprint() {
    let err = resolve_location("G-9", standard()).unwrap_err();
    assert_eq!(
        err,
        LocationError::NoStorageAtLocation {
            code: "G-9".to_string()
        }
    );
    assert_eq!(err.to_string(), "No storage at G-9");
}

#[test]
fn resolve_footprint_error_names_cell_not_spot() {
    let err = resolve_location("E-6-3", standard()).unwrap_err();
    assert_eq!(
        err,
        LocationError::NoStorageAtLocation {
            code: "E-6".to_string()
        }
    );
}

#[test]
fn resolve_passes_through_parse_errors() {
    assert_eq!(
        resolve_location("", standard()),
        Err(LocationError::EmptyInput)
    );
}

#[test]
fn resolve_accepts_valid_code() {
    let coord = resolve_location("d-6-1", standard()).unwrap();
    assert_eq!(coord.code(), "D-6-1");
    assert_eq!(coord.cell().code(), "D-6");
}

#[test]
fn from_grid_applies_same_rules() {
    let shape = standard();
    assert!(Coordinate::from_grid(shape, RowCode::I, 9, Some(9)).is_ok());
    assert_eq!(
        Coordinate::from_grid(shape, RowCode::G, 6, None),
        Err(LocationError::NoStorageAtLocation {
            code: "G-6".to_string()
        })
    );
    assert_eq!(
        Coordinate::from_grid(shape, RowCode::A, 1, Some(0)),
        Err(LocationError::InvalidSpot { max: 9 })
    );
    assert!(matches!(
        Coordinate::from_grid(shape, RowCode::H, 1, None),
        Err(LocationError::InvalidRow { row: 'H', .. })
    ));
}

#[test]
fn coordinate_serializes_row_as_letter() {
    let coord = Coordinate::new(RowCode::I, 2, Some(7));
    let json = serde_json::to_value(coord).unwrap();
    assert_eq!(json["row"], "I");
    assert_eq!(json["aisle"], 2);
    assert_eq!(json["spot"], 7);
}
