use std::collections::VecDeque;

/// An Rng handing out a scripted sequence of values, front to back, so
/// tests can pick the exact dice a roll produces.
pub struct MockRand {
    results: VecDeque<u64>,
}

impl MockRand {
    pub fn new(results: Vec<u64>) -> Self {
        Self {
            results: results.into(),
        }
    }
}

impl rand::RngCore for MockRand {
    fn next_u64(&mut self) -> u64 {
        self.results
            .pop_front()
            .expect("the test scripted enough roll values")
    }

    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn fill_bytes(&mut self, _: &mut [u8]) {}

    fn try_fill_bytes(&mut self, _: &mut [u8]) -> Result<(), rand::Error> {
        Ok(())
    }
}
