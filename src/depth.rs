use log::info;

/// Depth calculates minimum, maximum, average and percentile of null-leaf
/// depths in the [`RbTree`] tree.
///
/// A red-black tree with `n` entries never grows beyond `2 * log2(n + 1)`
/// levels, so [`Depth::max`] is expected to stay within that bound.
///
/// [`RbTree`]: crate::RbTree
#[derive(Clone, Debug)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
    depths: [u64; 256],
}

impl Depth {
    pub(crate) fn new() -> Depth {
        Default::default()
    }

    pub(crate) fn sample(&mut self, depth: usize) {
        self.samples += 1;
        self.total += depth;
        if self.samples == 1 || depth < self.min {
            self.min = depth
        }
        if depth > self.max {
            self.max = depth
        }
        self.depths[depth] += 1;
    }

    /// Return number of null-leaves sampled in [`RbTree`] instance.
    ///
    /// [`RbTree`]: crate::RbTree
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return minimum depth of null-leaf in [`RbTree`] instance.
    ///
    /// [`RbTree`]: crate::RbTree
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return maximum depth of null-leaf in [`RbTree`] instance. This is
    /// the height of the tree, counting the root as level one.
    ///
    /// [`RbTree`]: crate::RbTree
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average depth of null-leaves in [`RbTree`] instance.
    ///
    /// [`RbTree`]: crate::RbTree
    pub fn mean(&self) -> usize {
        match self.samples {
            0 => 0,
            samples => self.total / samples,
        }
    }

    /// Return depth as tuple of percentiles, each tuple provides
    /// (percentile, depth). Returned percentiles from 90, 91 .. 99
    pub fn percentiles(&self) -> Vec<(u8, usize)> {
        let mut percentiles: Vec<(u8, usize)> = vec![];
        if self.samples == 0 {
            return percentiles;
        }
        let (mut acc, mut prev_perc) = (0_u64, 90_u8);
        let iter = self.depths.iter().enumerate().filter(|(_, &item)| item > 0);
        for (depth, samples) in iter {
            acc += *samples;
            let perc = ((acc as f64 / self.samples as f64) * 100_f64) as u8;
            if perc >= prev_perc {
                percentiles.push((perc, depth));
                prev_perc = perc;
            }
        }
        percentiles
    }

    /// Pretty print depth statistics in human readable format, via the
    /// `log` facade at info level.
    pub fn pretty_print(&self, prefix: &str) {
        info!(
            "{}depth (min, max, avg): {:?}",
            prefix,
            (self.min, self.max, self.mean())
        );
        for (perc, depth) in self.percentiles().into_iter() {
            if depth > 0 {
                info!("{}  {} percentile = {}", prefix, perc, depth);
            }
        }
    }

    /// Convert depth statistics to JSON format, useful for plotting.
    pub fn json(&self) -> String {
        let ps: Vec<String> = self
            .percentiles()
            .into_iter()
            .map(|(d, n)| format!("\"{}\": {}", d, n))
            .collect();
        let strs = [
            format!("\"min\": {}", self.min),
            format!("\"mean\": {}", self.mean()),
            format!("\"max\": {}", self.max),
            format!("\"percentiles\": {{ {} }}", ps.join(", ")),
        ];
        "{ ".to_string() + strs.join(", ").as_str() + " }"
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth {
            samples: 0,
            min: 0,
            max: 0,
            total: 0,
            depths: [0; 256],
        }
    }
}
