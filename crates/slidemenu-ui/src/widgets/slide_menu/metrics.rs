//! Physical dimensions of the widget, in millimeters.

use slidemenu_ui_graphics::Mm;
use std::fmt;

/// Side of the square button.
pub const BUTTON_SIDE_MM: Mm = Mm(9.0);
/// Clip area reaching above the button.
pub const ADDITIONAL_TOP_MM: Mm = Mm(9.0);
pub const ADDITIONAL_LEFT_MM: Mm = Mm(11.0);
pub const ADDITIONAL_RIGHT_MM: Mm = ADDITIONAL_LEFT_MM;
pub const LANDING_ZONE_WIDTH_MM: Mm = Mm(11.0);
pub const LANDING_ZONE_HEIGHT_MM: Mm = Mm(9.0);
pub const BUTTON_STROKE_WIDTH_MM: Mm = Mm(1.0);

/// The set of millimeter constants the layout model converts into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideMenuMetrics {
    pub button_side: Mm,
    pub additional_top: Mm,
    pub additional_left: Mm,
    pub additional_right: Mm,
    pub zone_width: Mm,
    pub zone_height: Mm,
    pub stroke_width: Mm,
}

impl Default for SlideMenuMetrics {
    fn default() -> Self {
        Self {
            button_side: BUTTON_SIDE_MM,
            additional_top: ADDITIONAL_TOP_MM,
            additional_left: ADDITIONAL_LEFT_MM,
            additional_right: ADDITIONAL_RIGHT_MM,
            zone_width: LANDING_ZONE_WIDTH_MM,
            zone_height: LANDING_ZONE_HEIGHT_MM,
            stroke_width: BUTTON_STROKE_WIDTH_MM,
        }
    }
}

impl SlideMenuMetrics {
    /// Full clip width: button plus both side margins.
    pub fn full_width(&self) -> Mm {
        self.button_side + self.additional_left + self.additional_right
    }

    /// Full clip height: button plus top margin.
    pub fn full_height(&self) -> Mm {
        self.button_side + self.additional_top
    }

    /// Checks that every landing zone fits inside the clip margins.
    ///
    /// Zones are no larger than their margin in millimeters, and pixel
    /// conversion is monotonic, so the zones stay inside the clip rect at
    /// every density.
    pub fn validate(&self) -> Result<(), MetricsError> {
        let named = [
            ("button_side", self.button_side),
            ("additional_top", self.additional_top),
            ("additional_left", self.additional_left),
            ("additional_right", self.additional_right),
            ("zone_width", self.zone_width),
            ("zone_height", self.zone_height),
            ("stroke_width", self.stroke_width),
        ];
        for (name, value) in named {
            if !value.0.is_finite() || value.0 < 0.0 {
                return Err(MetricsError::InvalidLength { name, value: value.0 });
            }
        }

        if self.zone_width > self.additional_left || self.zone_width > self.additional_right {
            return Err(MetricsError::ZoneWiderThanMargin {
                zone: self.zone_width.0,
                margin: self.additional_left.0.min(self.additional_right.0),
            });
        }
        if self.zone_height > self.additional_top {
            return Err(MetricsError::ZoneTallerThanMargin {
                zone: self.zone_height.0,
                margin: self.additional_top.0,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetricsError {
    InvalidLength { name: &'static str, value: f32 },
    ZoneWiderThanMargin { zone: f32, margin: f32 },
    ZoneTallerThanMargin { zone: f32, margin: f32 },
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsError::InvalidLength { name, value } => {
                write!(f, "{name} must be a finite non-negative length, got {value}mm")
            }
            MetricsError::ZoneWiderThanMargin { zone, margin } => write!(
                f,
                "landing zone width {zone}mm exceeds side margin {margin}mm"
            ),
            MetricsError::ZoneTallerThanMargin { zone, margin } => write!(
                f,
                "landing zone height {zone}mm exceeds top margin {margin}mm"
            ),
        }
    }
}

impl std::error::Error for MetricsError {}
