/// Tax applied to every subscription, as a percentage of the pre-tax cost.
pub const TAX_PERCENT: f64 = 7.0;

/// Date format used for subscription start dates on the wire (day-month-year).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Smallest allowed subscription duration in months.
pub const MIN_DURATION_MONTHS: i16 = 1;

/// Largest allowed subscription duration in months, matching the stored width.
pub const MAX_DURATION_MONTHS: i16 = 127;
