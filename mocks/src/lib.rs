mod rng;
pub use rng::MockRand;

/// Maps raw RNG output onto die faces: a raw value `n` becomes face
/// `n % 6 + 1`, so a [`MockRand`] scripted with `face - 1` produces
/// exactly `face`.
pub struct DumbDistr {}

impl rand::distributions::Distribution<u8> for DumbDistr {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let raw: u64 = rng.gen();
        ((raw % 6) + 1) as u8
    }
}
