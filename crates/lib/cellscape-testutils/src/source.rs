use cellscape_models::dist::UniformSource;

/// Replays a fixed list of draws in order, wrapping around at the end.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    values: Vec<i64>,
    next: usize,
    pub requests: Vec<(i64, i64)>,
}

impl ScriptedSource {
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            next: 0,
            requests: Vec::new(),
        }
    }
}

impl UniformSource for ScriptedSource {
    fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        self.requests.push((min, max));
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        assert!(
            (min..=max).contains(&value),
            "scripted draw {} outside {}..={}",
            value,
            min,
            max
        );
        value
    }
}

/// Wraps another source and counts the draws taken from it.
#[derive(Clone, Debug)]
pub struct CountingSource<S: UniformSource> {
    inner: S,
    pub draws: u64,
}

impl<S: UniformSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, draws: 0 }
    }
}

impl<S: UniformSource> UniformSource for CountingSource<S> {
    fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        self.draws += 1;
        self.inner.uniform_int(min, max)
    }
}
