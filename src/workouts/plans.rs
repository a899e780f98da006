//! Built-in workout and diet plan catalogs.

use serde::Serialize;

/// A titled list of recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Session structure recommendations.
pub const WORKOUT_PLANS: &[Plan] = &[
    Plan {
        title: "Warm-up (5-10 min)",
        items: &[
            "5 min light cardio (Jog/Cycle) to raise heart rate.",
            "Jumping Jacks (30 reps) for dynamic mobility.",
            "Arm Circles (15 Fwd/Bwd) to prepare shoulders.",
        ],
    },
    Plan {
        title: "Strength & Cardio (45-60 min)",
        items: &[
            "Push-ups (3 sets of 10-15) - Upper body strength.",
            "Squats (3 sets of 15-20) - Lower body foundation.",
            "Plank (3 sets of 60 seconds) - Core stabilization.",
            "Lunges (3 sets of 10/leg) - Balance and leg development.",
        ],
    },
    Plan {
        title: "Cool-down (5 min)",
        items: &[
            "Slow Walking - Bring heart rate down gradually.",
            "Static Stretching (Hold 30s each) - Focus on major muscle groups.",
            "Deep Breathing Exercises - Aid recovery and relaxation.",
        ],
    },
];

/// Nutrition guides by training goal.
pub const DIET_PLANS: &[Plan] = &[
    Plan {
        title: "Weight Loss Focus (Calorie Deficit)",
        items: &[
            "Breakfast: Oatmeal with Berries (High Fiber).",
            "Lunch: Grilled Chicken/Tofu Salad (Lean Protein).",
            "Dinner: Vegetable Soup with Lentils (Low Calorie, High Volume).",
        ],
    },
    Plan {
        title: "Muscle Gain Focus (High Protein)",
        items: &[
            "Breakfast: 3 Egg Omelet, Spinach, Whole-wheat Toast (Protein/Carb combo).",
            "Lunch: Chicken Breast, Quinoa, and Steamed Veggies (Balanced Meal).",
            "Post-Workout: Protein Shake & Greek Yogurt (Immediate Recovery).",
        ],
    },
    Plan {
        title: "Endurance Focus (Complex Carbs)",
        items: &[
            "Pre-Workout: Banana & Peanut Butter (Quick Energy).",
            "Lunch: Whole Grain Pasta with Light Sauce (Sustainable Carbs).",
            "Dinner: Salmon & Avocado Salad (Omega-3s and Healthy Fats).",
        ],
    },
];

/// Find a workout plan by title.
pub fn workout_plan(title: &str) -> Option<&'static Plan> {
    WORKOUT_PLANS.iter().find(|p| p.title == title)
}

/// Find a diet plan by title.
pub fn diet_plan(title: &str) -> Option<&'static Plan> {
    DIET_PLANS.iter().find(|p| p.title == title)
}
