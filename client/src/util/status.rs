//! Order status classification and badge styling.
//!
//! DESIGN
//! ======
//! Status strings come from the backend unvalidated. They are parsed once into
//! [`OrderStatus`], whose `Other` arm catches everything unrecognized, so the
//! tone/icon lookups below are exhaustive matches with no missing case.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Known order lifecycle states plus a catch-all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Rejected,
    /// Any status the client does not recognize, kept verbatim for display.
    Other(String),
}

impl OrderStatus {
    /// Parse a backend status string, ignoring case and surrounding space.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "confirmed" => Self::Confirmed,
            "processing" => Self::Processing,
            "shipped" => Self::Shipped,
            "delivered" => Self::Delivered,
            "cancelled" | "canceled" => Self::Cancelled,
            "rejected" => Self::Rejected,
            _ => Self::Other(raw.trim().to_owned()),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Confirmed | Self::Delivered => StatusTone::Green,
            Self::Pending => StatusTone::Yellow,
            Self::Processing => StatusTone::Blue,
            Self::Shipped => StatusTone::Indigo,
            Self::Cancelled | Self::Rejected => StatusTone::Red,
            Self::Other(_) => StatusTone::Gray,
        }
    }

    pub fn icon(&self) -> StatusIcon {
        match self {
            Self::Confirmed => StatusIcon::Check,
            Self::Pending => StatusIcon::Clock,
            Self::Processing => StatusIcon::Gear,
            Self::Shipped => StatusIcon::Truck,
            Self::Delivered => StatusIcon::CheckCircle,
            Self::Cancelled | Self::Rejected => StatusIcon::Cross,
            Self::Other(_) => StatusIcon::Info,
        }
    }

    /// Lowercase display label. Unknown statuses keep the backend text verbatim.
    pub fn label(&self) -> String {
        match self {
            Self::Pending => "pending".to_owned(),
            Self::Confirmed => "confirmed".to_owned(),
            Self::Processing => "processing".to_owned(),
            Self::Shipped => "shipped".to_owned(),
            Self::Delivered => "delivered".to_owned(),
            Self::Cancelled => "cancelled".to_owned(),
            Self::Rejected => "rejected".to_owned(),
            Self::Other(raw) if raw.is_empty() => "unknown".to_owned(),
            Self::Other(raw) => raw.clone(),
        }
    }
}

/// Badge color family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Green,
    Yellow,
    Blue,
    Indigo,
    Red,
    Gray,
}

impl StatusTone {
    /// BEM modifier class for `.status-badge`.
    pub fn class(self) -> &'static str {
        match self {
            Self::Green => "status-badge--green",
            Self::Yellow => "status-badge--yellow",
            Self::Blue => "status-badge--blue",
            Self::Indigo => "status-badge--indigo",
            Self::Red => "status-badge--red",
            Self::Gray => "status-badge--gray",
        }
    }
}

/// Badge glyph, drawn as a 20x20 SVG path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    Check,
    Clock,
    Gear,
    Truck,
    CheckCircle,
    Cross,
    Info,
}

impl StatusIcon {
    pub fn svg_path(self) -> &'static str {
        match self {
            Self::Check => {
                "M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z"
            }
            Self::Clock => {
                "M10 18a8 8 0 100-16 8 8 0 000 16zm1-12a1 1 0 10-2 0v4a1 1 0 00.293.707l2.828 2.829a1 1 0 101.415-1.415L11 9.586V6z"
            }
            Self::Gear => {
                "M11.49 3.17c-.38-1.56-2.6-1.56-2.98 0a1.532 1.532 0 01-2.286.948c-1.372-.836-2.942.734-2.106 2.106.54.886.061 2.042-.947 2.287-1.561.379-1.561 2.6 0 2.978a1.532 1.532 0 01.947 2.287c-.836 1.372.734 2.942 2.106 2.106a1.532 1.532 0 012.287.947c.379 1.561 2.6 1.561 2.978 0a1.533 1.533 0 012.287-.947c1.372.836 2.942-.734 2.106-2.106a1.533 1.533 0 01.947-2.287c1.561-.379 1.561-2.6 0-2.978a1.532 1.532 0 01-.947-2.287c.836-1.372-.734-2.942-2.106-2.106a1.532 1.532 0 01-2.287-.947zM10 13a3 3 0 100-6 3 3 0 000 6z"
            }
            Self::Truck => {
                "M8 16.5a1.5 1.5 0 11-3 0 1.5 1.5 0 013 0zM15 16.5a1.5 1.5 0 11-3 0 1.5 1.5 0 013 0zM3 4a1 1 0 00-1 1v10a1 1 0 001 1h1.05a2.5 2.5 0 014.9 0H10a1 1 0 001-1V5a1 1 0 00-1-1H3zM14 7a1 1 0 00-1 1v6.05A2.5 2.5 0 0115.95 16H17a1 1 0 001-1v-5a1 1 0 00-.293-.707L16 7.586A1 1 0 0015.414 7H14z"
            }
            Self::CheckCircle => {
                "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
            }
            Self::Cross => {
                "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z"
            }
            Self::Info => {
                "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z"
            }
        }
    }
}
