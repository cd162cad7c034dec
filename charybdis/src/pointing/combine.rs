use usbd_hid::descriptor::MouseReport;

/// Report range of motion and scroll fields, -128 is not a valid HID value
const REPORT_MIN: i16 = -127;
const REPORT_MAX: i16 = 127;

fn clamp_sum(a: i8, b: i8) -> i8 {
    (a as i16 + b as i16).clamp(REPORT_MIN, REPORT_MAX) as i8
}

/// Merge the reports of both halves into one.
///
/// Motion and scroll are summed and clamped to the report range, buttons are OR-ed.
pub fn combine_reports(left: MouseReport, right: MouseReport) -> MouseReport {
    MouseReport {
        buttons: left.buttons | right.buttons,
        x: clamp_sum(left.x, right.x),
        y: clamp_sum(left.y, right.y),
        wheel: clamp_sum(left.wheel, right.wheel),
        pan: clamp_sum(left.pan, right.pan),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn report(buttons: u8, x: i8, y: i8, wheel: i8, pan: i8) -> MouseReport {
        MouseReport {
            buttons,
            x,
            y,
            wheel,
            pan,
        }
    }

    #[test]
    fn test_combine_sums_fields() {
        let combined = combine_reports(report(0b01, 3, -4, 1, 0), report(0b10, -1, 10, 0, -2));
        assert_eq!(combined.buttons, 0b11);
        assert_eq!(combined.x, 2);
        assert_eq!(combined.y, 6);
        assert_eq!(combined.wheel, 1);
        assert_eq!(combined.pan, -2);
    }

    #[test]
    fn test_combine_clamps() {
        let combined = combine_reports(report(0, 100, -100, 127, -128), report(0, 100, -100, 1, -1));
        assert_eq!(combined.x, 127);
        assert_eq!(combined.y, -127);
        assert_eq!(combined.wheel, 127);
        assert_eq!(combined.pan, -127);
    }
}
