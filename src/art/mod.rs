//! Fuzzy Adaptive Resonance Theory (Fuzzy ART) clustering.
//!
//! An online, incremental clusterer: each training vector either resonates
//! with an existing category (and refines its prototype) or mints a new
//! one. The number of categories is never fixed in advance; the vigilance
//! parameter controls how eagerly new ones appear.

use crate::error::{AgruparError, Result};
use crate::primitives::{Matrix, Vector};
use crate::traits::UnsupervisedEstimator;
use serde::{Deserialize, Serialize};

/// Outcome of a read-only classification.
///
/// # Examples
///
/// ```
/// use agrupar::art::Classification;
///
/// assert_eq!(Classification::Category(3).category(), Some(3));
/// assert_eq!(Classification::Unknown.as_i32(), -2);
/// assert_eq!(Classification::Empty.as_i32(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Input resonated with the category at this index.
    Category(usize),
    /// The best-matching category failed the vigilance test.
    Unknown,
    /// The model has no categories yet.
    Empty,
}

impl Classification {
    /// Returns the category index if the input was recognized.
    #[must_use]
    pub fn category(&self) -> Option<usize> {
        match self {
            Classification::Category(j) => Some(*j),
            _ => None,
        }
    }

    /// Returns true if the input matched an existing category.
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Classification::Category(_))
    }

    /// Integer encoding used by wire protocols and UIs: the category id
    /// for a match, `-2` for unknown, `-1` for an empty model.
    #[must_use]
    pub fn as_i32(&self) -> i32 {
        match self {
            Classification::Category(j) => *j as i32,
            Classification::Unknown => -2,
            Classification::Empty => -1,
        }
    }
}

/// Complement-codes a feature vector: clamps each component into [0, 1]
/// and returns the concatenation `[x, 1 - x]`.
///
/// The result has twice the input length and its components always sum to
/// the input length, which is what makes the match ratio a well-behaved
/// fraction.
///
/// # Examples
///
/// ```
/// use agrupar::art::complement_code;
/// use agrupar::primitives::Vector;
///
/// let coded = complement_code(&Vector::from_slice(&[0.1, 0.9]));
/// assert_eq!(coded.as_slice(), &[0.1, 0.9, 0.9, 0.1]);
/// assert!((coded.sum() - 2.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn complement_code(x: &Vector<f32>) -> Vector<f32> {
    let clamped = x.clamped(0.0, 1.0);
    let mut data = Vec::with_capacity(clamped.len() * 2);
    data.extend_from_slice(clamped.as_slice());
    data.extend(clamped.iter().map(|v| 1.0 - v));
    Vector::from_vec(data)
}

/// Fuzzy ART incremental clustering engine.
///
/// Owns an append-only collection of category prototypes (complement-coded
/// weight vectors). `train` assigns a vector to an existing category or a
/// new one; `classify` is the read-only counterpart with an explicit
/// "unknown" outcome.
///
/// # Hyperparameters
///
/// - `rho` (vigilance) in (0, 1]: minimum match ratio to reuse an existing
///   category. Higher values create more, tighter categories.
/// - `alpha` (choice parameter) > 0: regularizes the choice-function
///   denominator; keeps an all-zero prototype from dividing by zero.
/// - `beta` (learning rate) in [0, 1]: 1.0 replaces a resonating prototype
///   with the fuzzy AND outright (fast learning); 0.0 never updates.
///
/// # Examples
///
/// ```
/// use agrupar::prelude::*;
///
/// let mut art = FuzzyArt::new(0.9, 0.001, 1.0).unwrap();
/// let id = art.train(&Vector::from_slice(&[0.1, 0.1])).unwrap();
/// assert_eq!(id, 0);
/// let id = art.train(&Vector::from_slice(&[0.9, 0.9])).unwrap();
/// assert_eq!(id, 1);
/// assert_eq!(art.n_categories(), 2);
/// ```
///
/// # Performance
///
/// `train` and `classify` are O(n_categories × dimension); no allocation
/// beyond the complement-coded input and the score list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyArt {
    /// Vigilance parameter in (0, 1].
    rho: f32,
    /// Choice parameter, > 0.
    alpha: f32,
    /// Learning rate in [0, 1].
    beta: f32,
    /// Category prototypes, complement-coded, insertion order.
    weights: Vec<Vector<f32>>,
}

impl Default for FuzzyArt {
    /// The gesture-recognition deployment constants: vigilance 0.9, choice
    /// parameter 0.001, fast learning.
    fn default() -> Self {
        Self {
            rho: 0.9,
            alpha: 0.001,
            beta: 1.0,
            weights: Vec::new(),
        }
    }
}

impl FuzzyArt {
    /// Creates an engine with the given hyperparameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if `rho` is outside (0, 1], `alpha`
    /// is not a positive finite number, or `beta` is outside [0, 1]. NaN
    /// fails every range check. Invalid values fail construction rather
    /// than being clamped.
    pub fn new(rho: f32, alpha: f32, beta: f32) -> Result<Self> {
        if !(rho > 0.0 && rho <= 1.0) {
            return Err(AgruparError::invalid_hyperparameter(
                "rho",
                rho,
                "0 < rho <= 1",
            ));
        }
        if !(alpha > 0.0 && alpha.is_finite()) {
            return Err(AgruparError::invalid_hyperparameter(
                "alpha",
                alpha,
                "alpha > 0",
            ));
        }
        if !(0.0..=1.0).contains(&beta) {
            return Err(AgruparError::invalid_hyperparameter(
                "beta",
                beta,
                "0 <= beta <= 1",
            ));
        }
        Ok(Self {
            rho,
            alpha,
            beta,
            weights: Vec::new(),
        })
    }

    /// Restores an engine from previously learned prototypes.
    ///
    /// Prototype components are clamped into [0, 1] defensively, the same
    /// degradation an out-of-range live input gets.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` for invalid hyperparameters, or
    /// `DimensionMismatch` if any prototype is empty, has odd length, or
    /// disagrees with the first prototype's length.
    pub fn from_prototypes(
        rho: f32,
        alpha: f32,
        beta: f32,
        prototypes: Vec<Vector<f32>>,
    ) -> Result<Self> {
        let mut engine = Self::new(rho, alpha, beta)?;
        let expected = match prototypes.first() {
            Some(first) => first.len(),
            None => return Ok(engine),
        };
        if expected == 0 || expected % 2 != 0 {
            return Err(AgruparError::DimensionMismatch {
                expected: 2,
                actual: expected,
            });
        }
        for proto in &prototypes {
            if proto.len() != expected {
                return Err(AgruparError::DimensionMismatch {
                    expected,
                    actual: proto.len(),
                });
            }
        }
        engine.weights = prototypes.iter().map(|p| p.clamped(0.0, 1.0)).collect();
        Ok(engine)
    }

    /// Returns the vigilance parameter.
    #[must_use]
    pub fn rho(&self) -> f32 {
        self.rho
    }

    /// Returns the choice parameter.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Returns the learning rate.
    #[must_use]
    pub fn beta(&self) -> f32 {
        self.beta
    }

    /// Returns the number of learned categories.
    #[must_use]
    pub fn n_categories(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if no categories have been learned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the raw feature dimension `D` established by the first
    /// training sample, or `None` on an untrained engine. Prototypes are
    /// complement-coded and have length `2 * D`.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.weights.first().map(|w| w.len() / 2)
    }

    /// Returns the category prototypes in insertion order.
    #[must_use]
    pub fn prototypes(&self) -> &[Vector<f32>] {
        &self.weights
    }

    /// Returns the prototype of category `j`, if it exists.
    #[must_use]
    pub fn prototype(&self, j: usize) -> Option<&Vector<f32>> {
        self.weights.get(j)
    }

    /// Rejects inputs whose length disagrees with the established raw
    /// dimension. No truncation or padding, ever.
    fn check_dimension(&self, x_raw: &Vector<f32>) -> Result<()> {
        if let Some(d) = self.dimension() {
            if x_raw.len() != d {
                return Err(AgruparError::DimensionMismatch {
                    expected: d,
                    actual: x_raw.len(),
                });
            }
        }
        Ok(())
    }

    /// Choice function T_j for every category: overlap with the prototype
    /// relative to the prototype's own size.
    fn choice_scores(&self, x: &Vector<f32>) -> Vec<f32> {
        self.weights
            .iter()
            .map(|w| x.min_elementwise(w).sum() / (self.alpha + w.sum()))
            .collect()
    }

    /// Match ratio M_j against category `j`. Computed generically against
    /// sum(x) rather than assuming the complement-coding sum, so numerical
    /// drift cannot skew the vigilance test.
    fn match_ratio(&self, x: &Vector<f32>, j: usize) -> f32 {
        x.min_elementwise(&self.weights[j]).sum() / x.sum()
    }

    /// Trains on a single raw feature vector, returning the id of the
    /// category it was assigned to.
    ///
    /// The first sample creates category 0 outright. After that, all
    /// categories are ranked by the choice function and walked in order;
    /// the first one whose match ratio reaches the vigilance resonates and
    /// its prototype moves toward the fuzzy AND of itself and the input.
    /// If none resonates, the input becomes a new category verbatim, so
    /// every input lands in some category.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the input length disagrees with the
    /// dimension established by earlier training, or an `empty input`
    /// error for a zero-length first sample.
    pub fn train(&mut self, x_raw: &Vector<f32>) -> Result<usize> {
        if x_raw.is_empty() && self.is_empty() {
            return Err(AgruparError::empty_input("training vector"));
        }
        self.check_dimension(x_raw)?;
        let x = complement_code(x_raw);

        if self.weights.is_empty() {
            self.weights.push(x);
            return Ok(0);
        }

        let scores = self.choice_scores(&x);
        let mut order: Vec<usize> = (0..scores.len()).collect();
        // Stable sort: exact ties keep insertion order.
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        for &j in &order {
            if self.match_ratio(&x, j) >= self.rho {
                let anded = x.min_elementwise(&self.weights[j]);
                self.weights[j] = &anded.mul_scalar(self.beta)
                    + &self.weights[j].mul_scalar(1.0 - self.beta);
                return Ok(j);
            }
        }

        // Reset: no category resonated.
        self.weights.push(x);
        Ok(self.weights.len() - 1)
    }

    /// Classifies a raw feature vector without mutating the model.
    ///
    /// Unlike [`train`](Self::train), only the single best-scoring
    /// category is tested against the vigilance; there is no fallback walk
    /// down the ranked list. Classification never force-fits a weaker
    /// match, it reports [`Classification::Unknown`] instead.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the input length disagrees with the
    /// established dimension.
    pub fn classify(&self, x_raw: &Vector<f32>) -> Result<Classification> {
        if self.weights.is_empty() {
            return Ok(Classification::Empty);
        }
        self.check_dimension(x_raw)?;
        let x = complement_code(x_raw);

        let scores = self.choice_scores(&x);
        // First index wins exact ties, like argmax.
        let mut j_star = 0;
        for (j, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[j_star] {
                j_star = j;
            }
        }

        if self.match_ratio(&x, j_star) >= self.rho {
            Ok(Classification::Category(j_star))
        } else {
            Ok(Classification::Unknown)
        }
    }
}

impl UnsupervisedEstimator for FuzzyArt {
    type Labels = Vec<Classification>;

    /// Trains on every row of `x` in order.
    ///
    /// # Errors
    ///
    /// Returns an error on an empty matrix, and propagates any per-row
    /// training error.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        if x.n_rows() == 0 {
            return Err(AgruparError::empty_input("training matrix"));
        }
        for i in 0..x.n_rows() {
            self.train(&x.row(i))?;
        }
        Ok(())
    }

    /// Classifies every row of `x` read-only.
    ///
    /// # Panics
    ///
    /// Panics if a row's length disagrees with the model's established
    /// dimension; use [`FuzzyArt::classify`] for a fallible per-sample
    /// call.
    fn predict(&self, x: &Matrix<f32>) -> Self::Labels {
        (0..x.n_rows())
            .map(|i| {
                self.classify(&x.row(i))
                    .expect("row dimension must match the trained model")
            })
            .collect()
    }
}
