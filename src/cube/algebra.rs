//! The star and sharp operators
//!
//! Both operators are defined positionwise by fixed tables over the
//! ternary alphabet and then post-processed: star promotes a single
//! conflicting position to don't-care, sharp splits the left cube's
//! don't-care axes against the right cube's fixed axes.

use super::{Bit, Cube};

/// Positionwise star table. Rows are the left operand.
fn star_bit(a: Bit, b: Bit) -> Bit {
    match (a, b) {
        (Bit::Off, Bit::Off) => Bit::Off,
        (Bit::Off, Bit::On) => Bit::Null,
        (Bit::Off, Bit::Dc) => Bit::Off,
        (Bit::On, Bit::Off) => Bit::Null,
        (Bit::On, Bit::On) => Bit::On,
        (Bit::On, Bit::Dc) => Bit::On,
        (Bit::Dc, Bit::Off) => Bit::Off,
        (Bit::Dc, Bit::On) => Bit::On,
        (Bit::Dc, Bit::Dc) => Bit::Dc,
        _ => unreachable!("star operand contains an internal bit"),
    }
}

/// Positionwise sharp table. Rows are the left operand.
fn sharp_bit(a: Bit, b: Bit) -> Bit {
    match (a, b) {
        (Bit::Off, Bit::Off) => Bit::Epsilon,
        (Bit::Off, Bit::On) => Bit::Null,
        (Bit::Off, Bit::Dc) => Bit::Epsilon,
        (Bit::On, Bit::Off) => Bit::Null,
        (Bit::On, Bit::On) => Bit::Epsilon,
        (Bit::On, Bit::Dc) => Bit::Epsilon,
        (Bit::Dc, Bit::Off) => Bit::On,
        (Bit::Dc, Bit::On) => Bit::Off,
        (Bit::Dc, Bit::Dc) => Bit::Epsilon,
        _ => unreachable!("sharp operand contains an internal bit"),
    }
}

impl Cube {
    fn check_operand_pair(&self, other: &Cube) {
        assert!(
            !self.is_null() && !other.is_null(),
            "cube algebra rejects the null cube as an operand"
        );
        assert_eq!(
            self.arity(),
            other.arity(),
            "cube algebra requires equal input arity"
        );
        assert!(
            self.inputs().iter().all(|b| b.is_material())
                && other.inputs().iter().all(|b| b.is_material()),
            "cube algebra operands must contain only 0, 1, or -"
        );
    }

    /// Star product: the largest common subcube, generalized across a
    /// single disagreement
    ///
    /// Applies the star table positionwise. More than one conflicting
    /// position yields the null cube; exactly one conflict is promoted
    /// to don't-care. The result carries output ON.
    pub fn star(&self, other: &Cube) -> Cube {
        self.check_operand_pair(other);
        let mut word: Vec<Bit> = self
            .inputs()
            .iter()
            .zip(other.inputs().iter())
            .map(|(&a, &b)| star_bit(a, b))
            .collect();

        let conflicts = word.iter().filter(|&&b| b == Bit::Null).count();
        if conflicts > 1 {
            return Cube::null_cube();
        }
        if let Some(pos) = word.iter().position(|&b| b == Bit::Null) {
            word[pos] = Bit::Dc;
        }
        Cube::from_raw(word, Bit::On)
    }

    /// Sharp difference: a set of cubes whose minterm union is
    /// `self \ other`
    ///
    /// Applies the sharp table positionwise, then:
    /// - any conflicting position means the operands are disjoint, so
    ///   `self` survives untouched;
    /// - an all-epsilon word means `other` covers `self` entirely, so
    ///   only the null cube remains;
    /// - otherwise each axis where `self` is don't-care and `other` is
    ///   fixed contributes one cube, with that axis set to the complement
    ///   of `other`'s bit (the table value at that axis).
    pub fn sharp(&self, other: &Cube) -> Vec<Cube> {
        self.check_operand_pair(other);
        let word: Vec<Bit> = self
            .inputs()
            .iter()
            .zip(other.inputs().iter())
            .map(|(&a, &b)| sharp_bit(a, b))
            .collect();

        if word.iter().any(|&b| b == Bit::Null) {
            return vec![self.clone()];
        }
        if word.iter().all(|&b| b == Bit::Epsilon) {
            return vec![Cube::null_cube()];
        }

        let mut result = Vec::new();
        for (axis, &r) in word.iter().enumerate() {
            if matches!(r, Bit::Off | Bit::On) {
                let mut inputs = self.inputs().to_vec();
                inputs[axis] = r;
                result.push(Cube::from_raw(inputs, self.output()));
            }
        }
        result
    }
}
