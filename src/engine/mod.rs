//! The reconstruction pipeline: classify, pair, fabricate missing siblings, resolve entries.

mod entries;
mod pairer;
pub mod status;
mod unmatched;
mod validate;

pub use pairer::Pairer;
pub use status::{classify, half_match_status, match_status, Classification};

use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{Bracket, HalfMatch, Match};
use crate::options::ReconstructOptions;

/// Rebuilds the matches of one export snapshot.
///
/// A `Reconstructor` lives for a single run. Records are added first, then missing siblings
/// are fabricated and finally entries are resolved, which consumes the reconstructor.
///
/// # Examples
///
/// ```
/// # fn example(records: Vec<tpbracket::HalfMatch>) -> tpbracket::Result<()> {
/// use tpbracket::{ReconstructOptions, Reconstructor};
///
/// let bracket = Reconstructor::with_options(ReconstructOptions::default()).run(records)?;
/// println!("Reconstructed {} matches", bracket.matches.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Reconstructor {
    options: ReconstructOptions,
    pairer: Pairer,
}

impl Reconstructor {
    /// Create a new reconstructor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReconstructOptions) -> Self {
        Self {
            options,
            pairer: Pairer::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> &ReconstructOptions {
        &self.options
    }

    /// Register a single record.
    pub fn add(&mut self, hm: HalfMatch) -> Result<()> {
        self.pairer.add(hm)
    }

    /// Register all records of `half_matches`, stopping at the first error.
    pub fn extend<I>(&mut self, half_matches: I) -> Result<()>
    where
        I: IntoIterator<Item = HalfMatch>,
    {
        half_matches.into_iter().try_for_each(|hm| self.pairer.add(hm))
    }

    /// Number of records still waiting for their sibling.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pairer.pending()
    }

    /// Fabricate siblings for all waiting records. Returns how many were fabricated.
    pub fn resolve_unmatched(&mut self) -> Result<usize> {
        unmatched::resolve_unmatched(&mut self.pairer, &self.options)
    }

    /// Attach slots and statuses to every match.
    ///
    /// Fails with `PrematureResolution` if any record is still waiting for its sibling.
    pub fn resolve_entries(self) -> Result<Bracket> {
        entries::resolve_entries(self.pairer)
    }

    /// Run the whole pipeline over `half_matches`.
    #[instrument(skip_all)]
    pub fn run<I>(mut self, half_matches: I) -> Result<Bracket>
    where
        I: IntoIterator<Item = HalfMatch>,
    {
        self.extend(half_matches)?;
        debug!(
            matches = self.pairer.matches.len(),
            leaves = self.pairer.leaves.len(),
            unmatched = self.pending(),
            "paired half-matches"
        );
        if self.pending() > 0 {
            self.resolve_unmatched()?;
        }
        self.resolve_entries()
    }
}

/// Reconstructs all matches of `half_matches` with default options.
///
/// Matches are sorted by draw and match number.
pub fn reconstruct<I>(half_matches: I) -> Result<Vec<Match>>
where
    I: IntoIterator<Item = HalfMatch>,
{
    Reconstructor::new()
        .run(half_matches)
        .map(|bracket| bracket.matches)
}
