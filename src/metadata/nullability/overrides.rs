//! Nullability data for framework members compiled before annotations existed.
//!
//! Each entry maps the canonical signature key of a method (see [`super::SignatureKey`]) to
//! one flag sequence per position: index 0 is the return type, 1..=N are the parameters in
//! declaration order. An empty sequence marks a position without reference-kind constituents.
//!
//! The table is a plain `static`: it is complete at compile time and never mutated.
//! Duplicate keys are a configuration error; lookups return the first matching entry.

type Entry = (&'static str, &'static [&'static [bool]]);

const SKIP: &[bool] = &[];
const NOT_NULL: &[bool] = &[false];
const NULLABLE: &[bool] = &[true];
const NOT_NULL_ARRAY_OF_NULLABLE: &[bool] = &[false, true];

static OVERRIDES: &[Entry] = &[
    (
        "System.Boolean System.Boolean.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.Boolean System.Boolean.TryParse(System.String, System.Boolean)",
        &[SKIP, NULLABLE, SKIP],
    ),
    (
        "System.Void System.Buffer.BlockCopy(System.Array, System.Int32, System.Array, System.Int32, System.Int32)",
        &[SKIP, NOT_NULL, SKIP, NOT_NULL, SKIP, SKIP],
    ),
    (
        "System.Byte System.Byte.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.Byte System.Byte.Parse(System.String, System.Globalization.NumberStyles)",
        // NOT_NULL on the NumberStyles enum is intended, applying it fails the count check
        // and the parameter keeps its decoded type
        &[SKIP, NOT_NULL, NOT_NULL],
    ),
    (
        "System.Byte System.Byte.Parse(System.String, System.IFormatProvider)",
        &[SKIP, NOT_NULL, NULLABLE],
    ),
    (
        "System.Byte System.Byte.Parse(System.String, System.Globalization.NumberStyles, System.IFormatProvider)",
        &[SKIP, NOT_NULL, SKIP, NULLABLE],
    ),
    (
        "System.SByte System.SByte.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.SByte System.SByte.Parse(System.String, System.IFormatProvider)",
        &[SKIP, NOT_NULL, NULLABLE],
    ),
    (
        "System.Int16 System.Int16.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.Int16 System.Int16.Parse(System.String, System.IFormatProvider)",
        &[SKIP, NOT_NULL, NULLABLE],
    ),
    (
        "System.Int32 System.Int32.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.Int32 System.Int32.Parse(System.String, System.Globalization.NumberStyles)",
        &[SKIP, NOT_NULL, SKIP],
    ),
    (
        "System.Int32 System.Int32.Parse(System.String, System.IFormatProvider)",
        &[SKIP, NOT_NULL, NULLABLE],
    ),
    (
        "System.Int32 System.Int32.Parse(System.String, System.Globalization.NumberStyles, System.IFormatProvider)",
        &[SKIP, NOT_NULL, SKIP, NULLABLE],
    ),
    (
        "System.Int64 System.Int64.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.Int64 System.Int64.Parse(System.String, System.IFormatProvider)",
        &[SKIP, NOT_NULL, NULLABLE],
    ),
    (
        "System.UInt16 System.UInt16.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.UInt32 System.UInt32.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.UInt64 System.UInt64.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.Single System.Single.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.Double System.Double.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.Double System.Double.Parse(System.String, System.IFormatProvider)",
        &[SKIP, NOT_NULL, NULLABLE],
    ),
    (
        "System.Decimal System.Decimal.Parse(System.String)",
        &[SKIP, NOT_NULL],
    ),
    (
        "System.String System.String.Concat(System.String, System.String)",
        &[NOT_NULL, NULLABLE, NULLABLE],
    ),
    (
        "System.String System.String.Concat(System.String, System.String, System.String)",
        &[NOT_NULL, NULLABLE, NULLABLE, NULLABLE],
    ),
    (
        "System.String System.String.Join(System.String, System.String[])",
        &[NOT_NULL, NULLABLE, NOT_NULL_ARRAY_OF_NULLABLE],
    ),
    (
        "System.Boolean System.String.IsNullOrEmpty(System.String)",
        &[SKIP, NULLABLE],
    ),
    (
        "System.Boolean System.String.IsNullOrWhiteSpace(System.String)",
        &[SKIP, NULLABLE],
    ),
    (
        "System.Boolean System.String.Equals(System.String, System.String)",
        &[SKIP, NULLABLE, NULLABLE],
    ),
    (
        "System.Int32 System.String.Compare(System.String, System.String)",
        &[SKIP, NULLABLE, NULLABLE],
    ),
    (
        "System.Boolean System.Object.Equals(System.Object)",
        &[SKIP, NULLABLE],
    ),
    (
        "System.Boolean System.Object.Equals(System.Object, System.Object)",
        &[SKIP, NULLABLE, NULLABLE],
    ),
    (
        "System.Boolean System.Object.ReferenceEquals(System.Object, System.Object)",
        &[SKIP, NULLABLE, NULLABLE],
    ),
    ("System.String System.Object.ToString()", &[NULLABLE]),
    ("System.Type System.Object.GetType()", &[NOT_NULL]),
    (
        "System.Void System.ArgumentNullException..ctor(System.String)",
        &[SKIP, NULLABLE],
    ),
];

/// The full entry (one flag sequence per position) for `key`
#[must_use]
pub fn entry(key: &str) -> Option<&'static [&'static [bool]]> {
    OVERRIDES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, positions)| *positions)
}

/// The flag sequence for position `ordinal` (0 = return type) of the member keyed by `key`.
///
/// Returns `None` when the key is unknown or the ordinal is past the end of the entry.
#[must_use]
pub fn lookup(key: &str, ordinal: usize) -> Option<&'static [bool]> {
    entry(key).and_then(|positions| positions.get(ordinal).copied())
}
