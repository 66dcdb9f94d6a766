use crate::render_pipeline::codomain::maps::CodomainMap;

/// Ordered sequence of codomain maps over a working interval.
///
/// The output of map `i` feeds map `i + 1`; with no maps configured the
/// chain is the identity. Each link clamps its own output to the
/// interval, so the chain does not re-clamp between links.
#[derive(Debug, Clone, PartialEq)]
pub struct CodomainChain {
    interval_start: i32,
    interval_end: i32,
    maps: Vec<CodomainMap>,
}

impl Default for CodomainChain {
    fn default() -> Self {
        Self::new(0, 255)
    }
}

impl CodomainChain {
    /// An identity chain over `[interval_start, interval_end]`.
    pub fn new(interval_start: i32, interval_end: i32) -> Self {
        Self {
            interval_start,
            interval_end,
            maps: Vec::new(),
        }
    }

    pub fn interval(&self) -> (i32, i32) {
        (self.interval_start, self.interval_end)
    }

    pub fn maps(&self) -> &[CodomainMap] {
        &self.maps
    }

    /// Appends a map; it consumes the output of the current last link.
    pub fn add(&mut self, map: CodomainMap) {
        self.maps.push(map);
    }

    /// Removes every link equal to `map`.
    pub fn remove(&mut self, map: &CodomainMap) {
        self.maps.retain(|m| m != map);
    }

    pub fn clear(&mut self) {
        self.maps.clear();
    }

    pub fn transform(&self, value: i32) -> i32 {
        self.maps.iter().fold(value, |v, map| {
            map.apply(v, self.interval_start, self.interval_end)
        })
    }
}
