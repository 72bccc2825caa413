//! Mapping from UI-level tier selections to encoder parameters.
//!
//! The UI offers two pick lists, a size tier and an error-correction tier.
//! [`resolve`] turns their labels into [`EncodeParams`]; anything missing or
//! unrecognized falls back to the Medium tier.

use std::fmt;

use qrcode::EcLevel;

// =============================================================================
// SIZE TIER
// =============================================================================

/// Output size of the rendered symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SizeTier {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeTier {
    /// All tiers in display order.
    pub const ALL: [SizeTier; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Parse a display label. Returns `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.label() == label)
    }

    /// Module size in pixels and quiet-zone width in modules.
    pub fn params(&self) -> SizeParams {
        match self {
            Self::Small => SizeParams::new(8, 2),
            Self::Medium => SizeParams::new(10, 4),
            Self::Large => SizeParams::new(15, 6),
        }
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raster geometry for one size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeParams {
    /// Edge length of one module, in pixels.
    pub module_size: u32,
    /// Quiet-zone width, in modules.
    pub border: u32,
}

impl SizeParams {
    pub const fn new(module_size: u32, border: u32) -> Self {
        Self {
            module_size,
            border,
        }
    }
}

// =============================================================================
// ERROR CORRECTION TIER
// =============================================================================

/// Error-correction tier as presented to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CorrectionTier {
    Low,
    #[default]
    Medium,
    High,
    Highest,
}

impl CorrectionTier {
    /// All tiers in display order.
    pub const ALL: [CorrectionTier; 4] = [Self::Low, Self::Medium, Self::High, Self::Highest];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Highest => "Highest",
        }
    }

    /// Parse a display label. Returns `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.label() == label)
    }

    /// Standard correction level for this tier.
    pub fn level(&self) -> CorrectionLevel {
        match self {
            Self::Low => CorrectionLevel::L,
            Self::Medium => CorrectionLevel::M,
            Self::High => CorrectionLevel::Q,
            Self::Highest => CorrectionLevel::H,
        }
    }
}

impl fmt::Display for CorrectionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four standard QR error-correction levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectionLevel {
    /// ~7% of codewords recoverable.
    L,
    /// ~15% of codewords recoverable.
    M,
    /// ~25% of codewords recoverable.
    Q,
    /// ~30% of codewords recoverable.
    H,
}

impl CorrectionLevel {
    /// Approximate share of recoverable data, in percent.
    pub fn recovery_percent(&self) -> u8 {
        match self {
            Self::L => 7,
            Self::M => 15,
            Self::Q => 25,
            Self::H => 30,
        }
    }
}

impl From<CorrectionLevel> for EcLevel {
    fn from(level: CorrectionLevel) -> Self {
        match level {
            CorrectionLevel::L => EcLevel::L,
            CorrectionLevel::M => EcLevel::M,
            CorrectionLevel::Q => EcLevel::Q,
            CorrectionLevel::H => EcLevel::H,
        }
    }
}

// =============================================================================
// RESOLVED PARAMETERS
// =============================================================================

/// Everything the encoder needs besides the data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodeParams {
    pub level: CorrectionLevel,
    pub module_size: u32,
    pub border: u32,
}

impl EncodeParams {
    /// Parameters for a pair of typed tiers.
    pub fn from_tiers(size: SizeTier, correction: CorrectionTier) -> Self {
        let SizeParams {
            module_size,
            border,
        } = size.params();
        Self {
            level: correction.level(),
            module_size,
            border,
        }
    }
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self::from_tiers(SizeTier::default(), CorrectionTier::default())
    }
}

/// Resolve tier labels into encoder parameters.
///
/// Entry point for callers that hold raw labels (settings files, command
/// lines). Missing or unrecognized labels resolve to the Medium tier, the
/// `Default` of each tier type. Callers that already hold typed tiers use
/// [`EncodeParams::from_tiers`], which this delegates to.
pub fn resolve(size: Option<&str>, correction: Option<&str>) -> EncodeParams {
    let size_tier = size.and_then(SizeTier::from_label).unwrap_or_default();
    let correction_tier = correction
        .and_then(CorrectionTier::from_label)
        .unwrap_or_default();
    tracing::debug!(
        size = ?size,
        correction = ?correction,
        resolved_size = %size_tier,
        resolved_correction = %correction_tier,
        "resolved encode parameters"
    );
    EncodeParams::from_tiers(size_tier, correction_tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_table() {
        assert_eq!(SizeTier::Small.params(), SizeParams::new(8, 2));
        assert_eq!(SizeTier::Medium.params(), SizeParams::new(10, 4));
        assert_eq!(SizeTier::Large.params(), SizeParams::new(15, 6));
    }

    #[test]
    fn test_correction_table() {
        assert_eq!(CorrectionTier::Low.level(), CorrectionLevel::L);
        assert_eq!(CorrectionTier::Medium.level(), CorrectionLevel::M);
        assert_eq!(CorrectionTier::High.level(), CorrectionLevel::Q);
        assert_eq!(CorrectionTier::Highest.level(), CorrectionLevel::H);
    }

    #[test]
    fn test_resolve_every_label_pair() {
        for size in SizeTier::ALL {
            for correction in CorrectionTier::ALL {
                let params = resolve(Some(size.label()), Some(correction.label()));
                assert_eq!(params, EncodeParams::from_tiers(size, correction));
            }
        }
    }

    #[test]
    fn test_resolve_falls_back_to_medium() {
        let medium = EncodeParams {
            level: CorrectionLevel::M,
            module_size: 10,
            border: 4,
        };
        assert_eq!(resolve(None, None), medium);
        assert_eq!(resolve(Some("Huge"), Some("Extreme")), medium);
        assert_eq!(resolve(Some("small"), Some("")), medium);
        assert_eq!(EncodeParams::default(), medium);
    }

    #[test]
    fn test_resolve_mixed_known_and_unknown() {
        let params = resolve(Some("Large"), Some("bogus"));
        assert_eq!(params.module_size, 15);
        assert_eq!(params.border, 6);
        assert_eq!(params.level, CorrectionLevel::M);
    }

    #[test]
    fn test_labels_round_trip() {
        for tier in SizeTier::ALL {
            assert_eq!(SizeTier::from_label(&tier.to_string()), Some(tier));
        }
        for tier in CorrectionTier::ALL {
            assert_eq!(CorrectionTier::from_label(&tier.to_string()), Some(tier));
        }
    }

    #[test]
    fn test_recovery_percentages() {
        let percents: Vec<u8> = CorrectionTier::ALL
            .iter()
            .map(|t| t.level().recovery_percent())
            .collect();
        assert_eq!(percents, vec![7, 15, 25, 30]);
    }
}
