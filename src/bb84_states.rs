use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BB84State {
    QubitZero,
    QubitOne,
    QubitPlus,  // Represents the |+> state
    QubitMinus, // Represents the |-> state
}

impl BB84State {
    /// Basis in which this state yields a deterministic outcome.
    pub fn basis(self) -> MeasurementBasis {
        match self {
            BB84State::QubitZero | BB84State::QubitOne => MeasurementBasis::Rectilinear,
            BB84State::QubitPlus | BB84State::QubitMinus => MeasurementBasis::Diagonal,
        }
    }

    /// Bit value this state encodes in its own basis.
    pub fn bit(self) -> bool {
        matches!(self, BB84State::QubitOne | BB84State::QubitPlus)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MeasurementBasis {
    /// |0> and |1>
    Rectilinear,
    /// |+> and |->
    Diagonal,
}

impl MeasurementBasis {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen() {
            MeasurementBasis::Diagonal
        } else {
            MeasurementBasis::Rectilinear
        }
    }
}

pub fn random_bit<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen()
}

/// Returns true with probability `p`.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    p > 0.0 && rng.gen_bool(p.min(1.0))
}
