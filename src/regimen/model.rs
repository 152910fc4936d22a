/// The fixed set of fields every exercise carries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    BodyPart,
    Sets,
    Reps,
    Weight,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::BodyPart,
        Field::Sets,
        Field::Reps,
        Field::Weight,
    ];

    /// Human-readable label shown next to the value.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::BodyPart => "Muscle group(s)",
            Field::Sets => "# of sets",
            Field::Reps => "# of reps",
            Field::Weight => "Weight (lbs)",
        }
    }

    /// Question asked when the user enters this field.
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Name => "Name of exercise: ",
            Field::BodyPart => "Muscle group(s) worked: ",
            Field::Sets => "Number of sets: ",
            Field::Reps => "Number of reps: ",
            Field::Weight => "Weight in lbs (N/A if body weight exercise): ",
        }
    }
}

/// One workout entry. Values are kept exactly as typed; "N/A" is as valid as "135".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub body_part: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

impl Exercise {
    pub fn new(
        name: impl Into<String>,
        body_part: impl Into<String>,
        sets: impl Into<String>,
        reps: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            body_part: body_part.into(),
            sets: sets.into(),
            reps: reps.into(),
            weight: weight.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::BodyPart => &self.body_part,
            Field::Sets => &self.sets,
            Field::Reps => &self.reps,
            Field::Weight => &self.weight,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::BodyPart => &mut self.body_part,
            Field::Sets => &mut self.sets,
            Field::Reps => &mut self.reps,
            Field::Weight => &mut self.weight,
        };
        *slot = value.into();
    }

    /// Iterates `(field, value)` pairs in display order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// The ordered collection of exercises. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regimen {
    exercises: Vec<Exercise>,
}

impl Regimen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_exercises(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    pub fn push(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Exercise> {
        self.exercises.iter()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
