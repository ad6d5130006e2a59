use std::num::NonZero;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::location::Dimension;
use crate::session::{Session, SessionSettings};
use crate::tile::PowerLevel;

/// Reasons a builder may become invalid while being configured.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A board was requested with no columns or no rows.
    ZeroDimension,
    /// A radius override of `0` would leave every tile, the station's included, unpowered.
    ZeroRadius,
}

/// Collects board settings and generates a [`Session`] from them.
///
/// Setters take and return `&mut Self` so they chain; the builder can be [`Clone`]d to save its state.
/// Bad settings are recorded rather than rejected on the spot, and surface from [`Self::build`].
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    seed: Option<u64>,
    radius: Option<PowerLevel>,
    scramble: bool,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_size(8, 8)
    }
}

impl BoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            seed: None,
            radius: None,
            scramble: true,
            invalid_reasons: Default::default(),
        }
    }

    /// Like [`Self::with_dims`] for unchecked sizes; a zero makes the builder invalid.
    pub fn with_size(width: usize, height: usize) -> Self {
        match (NonZero::new(width), NonZero::new(height)) {
            (Some(width), Some(height)) => Self::with_dims((width, height)),
            _ => {
                let mut builder = Self::with_dims((NonZero::<usize>::MIN, NonZero::<usize>::MIN));
                builder.invalid_reasons.push(BuilderInvalidReason::ZeroDimension);
                builder
            }
        }
    }

    /// Generate from a fixed seed so the board and every later reset are reproducible.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Use a fixed power radius instead of deriving one from the tree's diameter.
    ///
    /// May cause the builder to enter a [`ZeroRadius`](BuilderInvalidReason::ZeroRadius) invalid state.
    pub fn radius(&mut self, radius: PowerLevel) -> &mut Self {
        if radius == 0 {
            self.invalid_reasons.push(BuilderInvalidReason::ZeroRadius);
            return self;
        }

        self.radius = Some(radius);
        self
    }

    /// Whether tiles are randomly rotated after wiring. On by default; turning it off yields a solved board.
    pub fn scramble(&mut self, scramble: bool) -> &mut Self {
        self.scramble = scramble;
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Generate a board from these settings.
    pub fn build(&self) -> Result<Session, GenerationError> {
        if !self.invalid_reasons.is_empty() {
            return Err(GenerationError::InvalidBuilder(self.invalid_reasons.clone()));
        }

        let rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Session::generate(
            SessionSettings {
                dims: self.dims,
                radius: self.radius,
                scramble: self.scramble,
                seeded: self.seed.is_some(),
            },
            rng,
        )
    }
}
