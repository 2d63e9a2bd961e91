use crate::{prelude::*, quantity::mass::Milligrams};

quantity!(Cups, via: i64, suffix: "cups", precision: 0);

impl Cups {
    /// Caffeine in a single cup.
    pub const CAFFEINE_PER_CUP: i64 = 130;

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Total caffeine consumed with the cups.
    ///
    /// Computed in integers, so the result is whole milligrams.
    pub fn caffeine(self) -> Result<Milligrams> {
        let milligrams = self
            .0
            .checked_mul(Self::CAFFEINE_PER_CUP)
            .with_context(|| format!("{self} is more caffeine than can be counted"))?;
        #[expect(clippy::cast_precision_loss)]
        let milligrams = milligrams as f64;
        Ok(Milligrams(milligrams))
    }
}
