/// Configuration for the message encoder.
///
/// ```text
/// ┌────────────────┬────────────────────────────────────────────────────┐
/// │ Field          │ Purpose                                            │
/// ├────────────────┼────────────────────────────────────────────────────┤
/// │ sizing         │ Exact protobuf sizing or the legacy list estimate  │
/// │ required_check │ Report the first missing required field, or all    │
/// │ size_limit     │ Largest message `encode_*` will produce            │
/// └────────────────┴────────────────────────────────────────────────────┘
/// ```
///
/// With the `serde` feature the config can be loaded from any serde
/// format; missing keys fall back to [`EncoderConfig::default`]:
///
/// ```json
/// { "sizing": "legacy", "required-check": "aggregate" }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct EncoderConfig {
    /// How `encoded_len` and the size calculator count bytes.
    pub sizing: SizingMode,

    /// How many missing required fields to report.
    pub required_check: RequiredCheck,

    /// Maximum encoded size in bytes. Checked against the exact encoded
    /// size, whatever `sizing` says, before anything is written.
    pub size_limit: usize,
}

/// Protobuf's hard ceiling on a serialized message: 2 GiB - 1.
pub const DEFAULT_SIZE_LIMIT: usize = i32::MAX as usize;

impl Default for EncoderConfig {
    /// Exact sizing, fail-fast required check, 2 GiB limit.
    fn default() -> Self {
        Self {
            sizing: SizingMode::default(),
            required_check: RequiredCheck::default(),
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// Byte-counting strategy for the size calculator.
///
/// ```text
/// ┌────────┬────────────────────────────────────────────────────────────┐
/// │ Mode   │ Behavior                                                   │
/// ├────────┼────────────────────────────────────────────────────────────┤
/// │ Exact  │ True protobuf lengths: varint kinds take 1–10 bytes, tags  │
/// │        │ take their real varint length. Matches the written bytes.  │
/// │ Legacy │ Repeated fields are estimated: every 32-bit kind counts 4, │
/// │        │ every 64-bit kind 8, plus one tag byte per element.        │
/// │        │ Scalar fields are still sized exactly.                     │
/// └────────┴────────────────────────────────────────────────────────────┘
/// ```
///
/// The writer always emits standard protobuf regardless of this setting.
/// In `Legacy` mode `encoded_len` can be above or below the bytes
/// produced; the size limit is always checked against the exact size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SizingMode {
    #[default]
    Exact,
    Legacy,
}

/// Required-field reporting mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RequiredCheck {
    /// Stop at the first missing field, in field-number order.
    #[default]
    FailFast,
    /// Collect every missing field, in field-number order.
    Aggregate,
}
