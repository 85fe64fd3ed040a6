#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Novella {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct Novellas {
    novellas: Vec<Novella>,
}

impl Novellas {
    pub fn new(novellas: Vec<Novella>) -> Self {
        Novellas { novellas }
    }

    pub fn iter(&self) -> NovellasIterator<'_> {
        NovellasIterator {
            current: 0,
            novellas: &self.novellas,
        }
    }
}

/// Walks a [`Novellas`] collection without exposing its storage.
pub struct NovellasIterator<'a> {
    current: usize,
    novellas: &'a [Novella],
}

impl<'a> Iterator for NovellasIterator<'a> {
    type Item = &'a Novella;

    fn next(&mut self) -> Option<Self::Item> {
        let novella = self.novellas.get(self.current)?;
        self.current += 1;
        Some(novella)
    }
}

impl<'a> IntoIterator for &'a Novellas {
    type Item = &'a Novella;
    type IntoIter = NovellasIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
