use crate::models::{Equipment, Exercise, Focus, Goal, WeekWorkout, WorkoutDay};

/// Focus rotation, indexed by `day_index % 4`.
pub const FOCUS_ROTATION: [Focus; 4] = [
    Focus::FullBody,
    Focus::UpperBody,
    Focus::LowerBody,
    Focus::FullBody,
];

/// Number of full-body exercises used on a full-body day.
pub const FULL_BODY_EXERCISE_COUNT: usize = 4;

/// Accessory closer for upper-body days.
pub const UPPER_BODY_CLOSER: &str = "Plank or dead bugs";

/// Exercises for one equipment type, grouped by focus.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseCatalog {
    pub full_body: &'static [&'static str],
    pub upper_body: &'static [&'static str],
    pub lower_body: &'static [&'static str],
    pub cardio: &'static [&'static str],
}

impl ExerciseCatalog {
    pub fn for_focus(&self, focus: Focus) -> &'static [&'static str] {
        match focus {
            Focus::FullBody => self.full_body,
            Focus::UpperBody => self.upper_body,
            Focus::LowerBody => self.lower_body,
        }
    }
}

pub static GYM_EXERCISES: ExerciseCatalog = ExerciseCatalog {
    full_body: &[
        "Squats (barbell or smith machine)",
        "Romanian deadlifts",
        "Lat pulldown or assisted pull-ups",
        "Dumbbell bench press",
        "Seated cable row",
        "Plank",
    ],
    upper_body: &[
        "Incline dumbbell press",
        "Seated row",
        "Shoulder press",
        "Lat pulldown",
        "Dumbbell bicep curls",
        "Tricep pushdowns",
    ],
    lower_body: &[
        "Leg press",
        "Lunges",
        "Hamstring curls",
        "Calf raises",
        "Glute bridges",
    ],
    cardio: &["Treadmill walk (incline)", "Cycling", "Elliptical"],
};

pub static HOME_EXERCISES: ExerciseCatalog = ExerciseCatalog {
    full_body: &[
        "Bodyweight squats",
        "Glute bridges",
        "Incline push-ups",
        "Bent-over backpack rows",
        "Dead bugs",
        "Plank",
    ],
    upper_body: &["Knee push-ups", "Chair dips", "Backpack rows", "Wall slides"],
    lower_body: &[
        "Reverse lunges",
        "Glute bridges",
        "Calf raises on a step",
        "Wall sit",
    ],
    cardio: &["Brisk walk", "March in place", "Skipping (if joints allow)"],
};

/// Sets/reps display strings for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetsRepsScheme {
    pub strength: &'static str,
    pub accessory: &'static str,
    pub cardio: &'static str,
}

pub fn exercise_catalog(equipment: Equipment) -> &'static ExerciseCatalog {
    match equipment {
        Equipment::Gym => &GYM_EXERCISES,
        Equipment::Home => &HOME_EXERCISES,
    }
}

/// Gain favours heavier, lower-rep work; lose favours higher reps and more cardio.
pub fn sets_reps_scheme(goal: Goal) -> SetsRepsScheme {
    match goal {
        Goal::GainWeight => SetsRepsScheme {
            strength: "3–4 sets x 6–10 reps",
            accessory: "2–3 sets x 10–12 reps",
            cardio: "10–15 min",
        },
        Goal::Maintain => SetsRepsScheme {
            strength: "3 sets x 8–12 reps",
            accessory: "2–3 sets x 10–15 reps",
            cardio: "10–20 min",
        },
        Goal::LoseWeight => SetsRepsScheme {
            strength: "3 sets x 10–15 reps",
            accessory: "2–3 sets x 12–15 reps",
            cardio: "20–30 min",
        },
    }
}

pub fn focus_for_day(day_index: u32) -> Focus {
    FOCUS_ROTATION[day_index as usize % FOCUS_ROTATION.len()]
}

/// Build one day's session: the focus exercises plus one closer.
pub fn generate_workout_day(goal: Goal, equipment: Equipment, day_index: u32) -> WorkoutDay {
    let catalog = exercise_catalog(equipment);
    let scheme = sets_reps_scheme(goal);
    let focus = focus_for_day(day_index);

    let main_lifts = match focus {
        Focus::FullBody => {
            let count = FULL_BODY_EXERCISE_COUNT.min(catalog.full_body.len());
            &catalog.full_body[..count]
        }
        Focus::UpperBody | Focus::LowerBody => catalog.for_focus(focus),
    };

    let mut exercises: Vec<Exercise> = main_lifts
        .iter()
        .map(|name| Exercise::new(name, scheme.strength))
        .collect();

    let closer = match focus {
        Focus::FullBody => Exercise::new(catalog.cardio[0], scheme.cardio),
        Focus::UpperBody => Exercise::new(UPPER_BODY_CLOSER, scheme.accessory),
        Focus::LowerBody => Exercise::new(catalog.cardio[1], scheme.cardio),
    };
    exercises.push(closer);

    WorkoutDay {
        day_index,
        focus,
        equipment,
        goal,
        exercises,
    }
}

/// Build `days_per_week` sessions following the focus rotation.
///
/// `week_index` is carried as metadata only.
pub fn generate_weekly_workout(
    goal: Goal,
    days_per_week: u32,
    equipment: Equipment,
    week_index: u32,
) -> WeekWorkout {
    let days: Vec<WorkoutDay> = (0..days_per_week)
        .map(|i| generate_workout_day(goal, equipment, i))
        .collect();

    tracing::info!(%goal, days_per_week, %equipment, week_index, "generated weekly workout");

    WeekWorkout {
        week_index,
        goal,
        days_per_week,
        equipment,
        days,
    }
}
