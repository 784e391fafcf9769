use super::Topology;
use super::rle::{self, Decoder};

/// A pattern ready to be seeded: RLE body, where to put it, and the
/// topology it was authored for. The topology is a hint applied by the
/// engine when seeding; the decoder itself never looks at it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub origin: (isize, isize),
    pub rle: String,
    pub topology: Topology,
}

impl Pattern {
    pub fn new(
        name: impl Into<String>,
        origin: (isize, isize),
        rle: impl Into<String>,
        topology: Topology,
    ) -> Self {
        Self {
            name: name.into(),
            origin,
            rle: rle.into(),
            topology,
        }
    }

    /// Decode the live cells at the pattern's own origin
    pub fn cells(&self) -> Decoder<'_> {
        rle::decode(&self.rle, self.origin)
    }
}

/// Pattern catalog, laid out for a 200x150 grid
pub mod presets {
    use super::*;

    pub fn r_pentomino() -> Pattern {
        Pattern::new("R-pentomino", (100, 75), "5b$2b2ob$b2o2b$2bo2b$5b!", Topology::Toroidal)
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new("Glider", (10, 10), "bob$2bo$3o!", Topology::Toroidal)
    }

    /// Lightweight spaceship
    pub fn spaceship() -> Pattern {
        Pattern::new("Spaceship", (10, 75), "bo2bo$o4b$o3bo$4o!", Topology::Toroidal)
    }

    pub fn trans_queen_bee_shuttle() -> Pattern {
        Pattern::new(
            "Trans Queen Bee Shuttle",
            (90, 75),
            "9bo12b$7bobo12b$6bobo11b2o$2o3bo2bo11b2o$2o4bobo13b$7bobo12b$9bo!",
            Topology::Toroidal,
        )
    }

    pub fn queen_bee_loop() -> Pattern {
        Pattern::new(
            "Queen Bee Loop",
            (80, 65),
            concat!(
                "12bo11b$12bobo9b$13bobo8b$13bo2bo7b$13bobo8b$12bobo9b$12bo11b$3bo20b$",
                "2bobo19b$bo3bo18b$2b3o19b$2o3b2o17b$17b2o3b2o$19b3o2b$18bo3bob$19bobo",
                "2b$20bo3b$11bo12b$9bobo12b$8bobo13b$7bo2bo13b$8bobo13b$9bobo12b$11bo!",
            ),
            Topology::Toroidal,
        )
    }

    pub fn partial_queen_bee_loop() -> Pattern {
        Pattern::new(
            "Partial Queen Bee Loop",
            (80, 65),
            concat!(
                "20b2o2b$20b2o2b$2b2o20b$2b2o20b4$3bo20b$2bobo19b$bo3bo18b$2b3o19b$2o3b",
                "2o17b$17b2o3b2o$19b3o2b$18bo3bob$19bobo2b$20bo3b$11bo12b$9bobo12b$8bob",
                "o13b$7bo2bo13b$8bobo13b$9bobo12b$11bo!",
            ),
            Topology::Toroidal,
        )
    }

    /// Tagalong for two lightweight spaceships
    pub fn tagalong() -> Pattern {
        Pattern::new(
            "Tagalong for two lightweight spaceships",
            (10, 70),
            concat!(
                "21bo3b$18b4o3b$13bo2bob2o5b$13bo11b$4o8bo3bob2o5b$o3bo5b2ob2obobob5o$o",
                "9b2obobobo2b5o$bo2bo2b2o2bo3b3o2bob2ob$6bo2bob2o12b$6bo4b2o12b$6bo2bob",
                "2o12b$bo2bo2b2o2bo3b3o2bob2ob$o9b2obobobo2b5o$o3bo5b2ob2obobob5o$4o8bo",
                "3bob2o5b$13bo11b$13bo2bob2o5b$18b4o3b$21bo!",
            ),
            Topology::Toroidal,
        )
    }

    pub fn glider_duplicator() -> Pattern {
        Pattern::new(
            "Glider Duplicator",
            (12, 42),
            concat!(
                "44b2o4b$44b2o4b9$41b2obob2o2b2$41bo5bo2b2$42b2ob2o3b$44bo5b3$38b2o6bo",
                "3b$37bobo5bobo2b$12bo26bo4bo3bob$13bo30b5ob$11b3o29b2o3b2o$44b5ob$45b",
                "3o2b$46bo3b$24b2o4b3o17b$24b2o6bo17b$31bo18b5$23b2o25b$22bobo21b2o2b$",
                "24bo21b2o2b$13bo36b$12b4o34b$11b2obobo6bobo24b$2o8b3obo2bo3bo3bo24b$2o",
                "9b2obobo4bo28b$12b4o4bo4bo24b$13bo7bo28b$21bo3bo6b2o16b$23bobo6bobo15b",
                "$34bo15b$34b2o!",
            ),
            Topology::Bounded,
        )
    }

    /// Gun emitting two glider streams
    pub fn twogun() -> Pattern {
        Pattern::new(
            "Twogun",
            (12, 12),
            concat!(
                "27bo11b$25bobo11b$15b2o6b2o12b2o$14bo3bo4b2o12b2o$3b2o8bo5bo3b2o14b$3b",
                "2o8bo3bob2o4bobo11b$13bo5bo7bo11b$14bo3bo20b$15b2o22b$26bo12b$27b2o10b",
                "$26b2o11b4$21b2o16b$9bobo10b2o15b$9bo2bo8bo17b$2o10b2o11b2o12b$2o8bo3b",
                "2o8bobo12b$5b2o5b2o9bo6b2o7b$4bo4bo2bo10bo2bo2bo2bo6b$9bobo11bo6b3o6b$",
                "24bobo5b3o4b$25b2o6bobo3b$35bo3b$35b2o!",
            ),
            Topology::Bounded,
        )
    }

    pub fn newgun() -> Pattern {
        Pattern::new(
            "Newgun",
            (12, 12),
            concat!(
                "23b2o24b2o$23b2o24b2o$41b2o8b$40bo2bo7b$41b2o8b2$36b3o12b$36bobo12b$9b",
                "2o25b3o12b$9b2o25b2o13b$8bo2bo23b3o13b$8bo2bob2o20bobo13b$8bo4b2o20b3o",
                "13b$10b2ob2o36b$31b2o18b$21b2o7bo2bo17b$21b2o8b2o18b$49b2o$49b2o2$4b2o",
                "18bo26b$2o4b4o10b2o2b2ob3o21b$2o2b2ob3o10b2o4b4o21b$4bo19b2o!",
            ),
            Topology::Bounded,
        )
    }

    pub fn block_laying_switch_engine() -> Pattern {
        Pattern::new(
            "Block-laying switch engine",
            (150, 110),
            concat!(
                "18bo10b$b3o8bo5bo10b$o3bo6bo7bo9b$b2o9b4o2b2o9b$3b2ob2o9b3o9b$5b2o11bo",
                "bo8b$19bo7b2o$19bo7b2o11$7b2o20b$7b2o20b7$15b2o12b$15b2o!",
            ),
            Topology::Toroidal,
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            r_pentomino(),
            glider(),
            spaceship(),
            trans_queen_bee_shuttle(),
            queen_bee_loop(),
            partial_queen_bee_loop(),
            tagalong(),
            glider_duplicator(),
            twogun(),
            newgun(),
            block_laying_switch_engine(),
        ]
    }

    /// Look a preset up by name, ignoring ASCII case
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name.trim()))
    }
}
