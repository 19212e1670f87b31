/// Deterministic ID source for one diagram build.
///
/// Identical input trees must produce byte-identical documents, so every
/// "random" field (element IDs, z-order indices, seeds, nonces, timestamps)
/// comes from instance-scoped counters. Hosts that build several diagrams
/// must construct a fresh generator per build; the driver does this
/// internally.
#[derive(Debug)]
pub struct IdGenerator {
    next_element: u64,
    next_index: u64,
    next_group: u64,
    next_timestamp: u64,
    rng_state: u64,
}

/// All emitted `updated` timestamps count up from this fixed epoch.
const BASE_TIMESTAMP: u64 = 1_700_000_000_000;

const RNG_SEED: u64 = 0x5eed_1234_abcd_0001;

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            next_element: 0,
            next_index: 0,
            next_group: 0,
            next_timestamp: 0,
            rng_state: RNG_SEED,
        }
    }

    /// Stable element ID, unique within the document.
    pub fn element_id(&mut self) -> String {
        self.next_element += 1;
        format!("el-{:06}", self.next_element)
    }

    /// Fractional z-order index. Zero-padded so lexicographic order equals
    /// emission order, which is what the consuming editor requires.
    pub fn z_index(&mut self) -> String {
        self.next_index += 1;
        format!("a{:05}", self.next_index)
    }

    pub fn group_id(&mut self) -> String {
        self.next_group += 1;
        format!("grp-{:04}", self.next_group)
    }

    /// Deterministic stand-in for the editor's random 32-bit seeds.
    pub fn seed(&mut self) -> u32 {
        self.advance_rng()
    }

    pub fn nonce(&mut self) -> u32 {
        self.advance_rng()
    }

    /// Monotonic pseudo-timestamp in epoch milliseconds.
    pub fn timestamp(&mut self) -> u64 {
        self.next_timestamp += 1;
        BASE_TIMESTAMP + self.next_timestamp
    }

    fn advance_rng(&mut self) -> u32 {
        // Knuth MMIX constants; only determinism matters here.
        self.rng_state = self
            .rng_state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.rng_state >> 33) as u32
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
