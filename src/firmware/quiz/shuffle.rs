/// Small xorshift PRNG behind the session shuffle. Seeded once at boot from
/// shell channel noise; the stream quality is adequate for dealing
/// questions, not for anything cryptographic.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ShuffleRng {
    state: u32,
}

impl ShuffleRng {
    pub(crate) const fn seeded(seed: u32) -> Self {
        // Xorshift has a single absorbing zero state.
        let state = if seed == 0 { 0xA5A5_5A5A } else { seed };
        Self { state }
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        let mut value = self.state;
        value ^= value << 13;
        value ^= value >> 17;
        value ^= value << 5;
        self.state = value;
        value
    }

    pub(crate) fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        self.next_u32() % bound
    }
}
