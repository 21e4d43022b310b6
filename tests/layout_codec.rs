// Integration tests for the layout position codec and per-board layouts

use openfire_shared::layout::{board_layout, SLOT_LIMIT};
use openfire_shared::{default_mapping, layout, Board, LayoutError, LayoutPosition, PinFunction, Region};

#[test]
fn test_left_seven_example() {
    let pos = LayoutPosition::encode(Region::Left, 7);
    assert_eq!(pos.raw(), 7 + 512);
    assert_eq!(LayoutPosition::decode(519), Ok((Region::Left, 7)));
}

#[test]
fn test_round_trip_law() {
    for region in Region::ALL {
        for slot in [0, 1, 7, 255, 256, SLOT_LIMIT - 1] {
            let pos = LayoutPosition::try_encode(region, slot).unwrap();
            assert_eq!(LayoutPosition::decode(pos.raw()), Ok((region, slot)));
        }
    }
}

#[test]
fn test_slot_limit_enforced() {
    for region in Region::ALL {
        assert_eq!(
            LayoutPosition::try_encode(region, SLOT_LIMIT),
            Err(LayoutError::SlotOverflow { slot: SLOT_LIMIT })
        );
    }
}

#[test]
fn test_layouts_cover_every_gpio() {
    for board in Board::ALL {
        assert_eq!(board_layout(board).len(), board.gpio_count(), "{board}");
    }
}

#[test]
fn test_unavailable_pins_are_hidden() {
    for board in Board::ALL {
        let mapping = default_mapping(board.token());
        let positions = board_layout(board);
        for (gpio, function) in mapping.iter() {
            if function == PinFunction::Unavailable {
                assert!(positions[gpio].is_hidden(), "{board} GPIO {gpio}");
            }
        }
    }
}

#[test]
fn test_waveshare_middle_column() {
    let positions = layout("waveshareZero");
    assert_eq!((positions[10].region(), positions[10].slot()), (Region::Middle, 3));
    assert_eq!((positions[11].region(), positions[11].slot()), (Region::Middle, 2));
}

#[test]
fn test_unknown_board_uses_generic_layout() {
    assert_eq!(layout("nope"), board_layout(Board::Generic));
    assert!(layout("nope").iter().all(|p| !p.is_hidden()));
}
