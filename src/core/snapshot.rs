/// Something that can fill byte snapshots: the browser `AnalyserNode`, or a
/// fixed buffer in host tests.
pub trait SnapshotSource {
    /// Number of frequency buckets (`fftSize / 2`).
    fn frequency_bin_count(&self) -> usize;
    /// Number of time-domain samples (`fftSize`).
    fn time_domain_len(&self) -> usize;
    fn fill_frequency(&self, out: &mut [u8]);
    fn fill_time_domain(&self, out: &mut [u8]);
}

/// Owns one audio source and the snapshot buffers read each tick.
///
/// Buffers are sized once from the source; every call overwrites them and
/// hands out a shared slice, so downstream stages only ever see the latest
/// frame.
pub struct AudioSampler<S> {
    source: S,
    frequency: Vec<u8>,
    time_domain: Vec<u8>,
}

impl<S: SnapshotSource> AudioSampler<S> {
    pub fn new(source: S) -> Self {
        let frequency = vec![0; source.frequency_bin_count()];
        let time_domain = vec![0; source.time_domain_len()];
        Self {
            source,
            frequency,
            time_domain,
        }
    }

    pub fn frequency_snapshot(&mut self) -> &[u8] {
        self.source.fill_frequency(&mut self.frequency);
        &self.frequency
    }

    pub fn time_domain_snapshot(&mut self) -> &[u8] {
        self.source.fill_time_domain(&mut self.time_domain);
        &self.time_domain
    }

    /// Both snapshots from the same tick.
    pub fn snapshots(&mut self) -> (&[u8], &[u8]) {
        self.source.fill_frequency(&mut self.frequency);
        self.source.fill_time_domain(&mut self.time_domain);
        (&self.frequency, &self.time_domain)
    }
}
