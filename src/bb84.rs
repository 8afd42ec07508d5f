use crate::bb84_states::{chance, random_bit, BB84State, MeasurementBasis};
use rand::Rng;

pub fn generate_bb84_state(bit: bool, basis: MeasurementBasis) -> BB84State {
    match basis {
        MeasurementBasis::Rectilinear => {
            if bit {
                BB84State::QubitOne
            } else {
                BB84State::QubitZero
            }
        }
        MeasurementBasis::Diagonal => {
            if bit {
                BB84State::QubitPlus
            } else {
                BB84State::QubitMinus
            }
        }
    }
}

/// Measures `state` in `basis`. A basis mismatch collapses to a uniformly random bit.
pub fn measure_bb84_state<R: Rng + ?Sized>(
    state: BB84State,
    basis: MeasurementBasis,
    rng: &mut R,
) -> bool {
    if state.basis() == basis {
        state.bit()
    } else {
        random_bit(rng)
    }
}

pub fn flip_state(state: BB84State) -> BB84State {
    match state {
        BB84State::QubitZero => BB84State::QubitOne,
        BB84State::QubitOne => BB84State::QubitZero,
        BB84State::QubitPlus => BB84State::QubitMinus,
        BB84State::QubitMinus => BB84State::QubitPlus,
    }
}

/// Intercept-resend: Eve measures in a random basis and forwards what she saw.
pub fn intercept_resend<R: Rng + ?Sized>(state: BB84State, rng: &mut R) -> BB84State {
    let eve_basis = MeasurementBasis::random(rng);
    let eve_bit = measure_bb84_state(state, eve_basis, rng);
    generate_bb84_state(eve_bit, eve_basis)
}

/// Carries a qubit from Alice to Bob through an optional eavesdropper and a noisy channel.
pub fn transmit<R: Rng + ?Sized>(
    state: BB84State,
    eavesdrop_probability: f64,
    noise_probability: f64,
    rng: &mut R,
) -> BB84State {
    let state = if chance(rng, eavesdrop_probability) {
        intercept_resend(state, rng)
    } else {
        state
    };
    if chance(rng, noise_probability) {
        flip_state(state)
    } else {
        state
    }
}

/// One BB84 round as seen after Bob's measurement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Round {
    pub alice_bit: bool,
    pub alice_basis: MeasurementBasis,
    pub bob_basis: MeasurementBasis,
    pub bob_bit: bool,
}

impl Round {
    pub fn bases_match(&self) -> bool {
        self.alice_basis == self.bob_basis
    }
}

pub fn run_round<R: Rng + ?Sized>(
    eavesdrop_probability: f64,
    noise_probability: f64,
    rng: &mut R,
) -> Round {
    let alice_bit = random_bit(rng);
    let alice_basis = MeasurementBasis::random(rng);
    let sent = generate_bb84_state(alice_bit, alice_basis);

    let received = transmit(sent, eavesdrop_probability, noise_probability, rng);

    let bob_basis = MeasurementBasis::random(rng);
    let bob_bit = measure_bb84_state(received, bob_basis, rng);

    Round {
        alice_bit,
        alice_basis,
        bob_basis,
        bob_bit,
    }
}

/// Keeps only the rounds where both parties used the same basis.
pub fn sift(rounds: &[Round]) -> (Vec<bool>, Vec<bool>) {
    rounds
        .iter()
        .filter(|round| round.bases_match())
        .map(|round| (round.alice_bit, round.bob_bit))
        .unzip()
}
