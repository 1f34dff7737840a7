//! Canned reply copy for the studio chat widget.
//!
//! Wording can change freely; the categories and the class-list
//! interpolation are what the rule table depends on.

pub const GREETINGS: &[&str] = &[
    "Hello! I'm your personal fitness assistant 💪 Ready to crush your fitness goals today?",
    "Hey there, fitness champion! How can I help you on your wellness journey?",
    "Hi! Whether you need class info, workout tips, or nutrition advice, I'm here to help! 🏋️",
];

pub const CLASS_LIST_LEAD: &str = "Our upcoming classes include: ";

pub const CLASS_LIST_TAIL: &str = "Each class is designed by expert instructors to help you reach your fitness goals. Would you like details about a specific class type?";

pub const BOOKING_HOW_TO: &str = "🎯 Ready to book a class? Here's how:\n\
1. Click the 'Book Class' tab above\n\
2. Select your preferred class\n\
3. Enter your name and email\n\
4. Hit that book button!\n\
\n\
Pro tip: Book early as popular classes fill up fast!";

pub const WEIGHT_LOSS: &str = "🎯 Weight loss tips from your fitness coach:\n\
• Create a calorie deficit by burning more calories than you consume\n\
• Combine cardio with strength training for optimal fat loss\n\
• Get 7-9 hours of quality sleep to support metabolism\n\
\n\
Our Zumba Dance and HIIT Training classes are excellent for burning calories!";

pub const MUSCLE_BUILDING: &str = "💪 Muscle building essentials:\n\
• Eat in a slight calorie surplus with adequate protein (1.6-2.2g per kg)\n\
• Progressive overload - gradually increase weights, reps, or intensity\n\
• Rest is crucial - muscles grow during recovery, not just during workouts\n\
\n\
Our Strength Training and Pilates classes will help you build lean muscle!";

pub const NUTRITION: &str = "🥗 Nutrition is 70% of your results! Key tips:\n\
• Eat protein with every meal to support muscle recovery\n\
• Time your carbs around workouts for energy and recovery\n\
• Stay hydrated - drink at least 8 glasses of water daily\n\
\n\
Remember: You can't out-train a bad diet!";

pub const WORKOUT_BEGINNER: &str = "🌟 New to fitness? Start with 3 days/week, 30-45 minutes per session. Focus on basic movements and building consistency.\n\
\n\
I recommend starting with our Yoga Basics or Dance Fitness classes!";

pub const WORKOUT_ADVANCED: &str = "🔥 Ready for intense training? 5-6 days/week with specialized training splits. Include periodization and recovery protocols.\n\
\n\
Our HIIT Training and Strength classes are perfect for you!";

pub const WORKOUT_GENERAL: &str = "💪 Great question about workouts! 4-5 days/week with a mix of cardio and strength training. Add variety to prevent plateaus.\n\
\n\
What's your current fitness level?";

pub const MOTIVATION: &[&str] = &[
    "💪 Remember: You're not just building muscle, you're building character!\n\nWhat's one small action you can take today?",
    "🌟 The only bad workout is the one that didn't happen!\n\nWhat's one small action you can take today?",
    "🔥 Your body can stand almost anything. It's your mind you have to convince!\n\nWhat's one small action you can take today?",
];

pub const INSTRUCTORS: &str = "Our certified instructors:\n\
• Sarah Johnson - Yoga specialist (8+ years)\n\
• Maria Rodriguez - Dance & Zumba expert\n\
• Mike Chen - HIIT & strength training\n\
• Emma Wilson - Pilates master\n\
• David Brown - Strength training expert\n\
\n\
Any particular instructor you'd like to know more about?";

pub const ONBOARDING: &str = "🌱 Welcome to your fitness journey! Beginner roadmap:\n\
1. Start with Yoga Basics or Dance Fitness\n\
2. Aim for 2-3 classes per week\n\
3. Focus on form over intensity\n\
4. Listen to your body\n\
5. Be patient - results take 4-6 weeks!\n\
\n\
Which class type interests you most?";

pub const HELP: &str = "🤖 I'm your comprehensive fitness assistant! I can help with:\n\
\n\
📅 Class Information & Booking\n\
💪 Workout Plans & Tips\n\
🥗 Nutrition Guidance\n\
🎯 Goal Setting & Motivation\n\
Instructor Information\n\
📝 Booking Management\n\
\n\
What would you like to explore?";

pub const THANKS: &str = "You're absolutely welcome! Keep crushing those fitness goals! 💪";

/// Default reply; echoes the utterance exactly as the user typed it.
pub fn fallback(utterance: &str) -> String {
    format!(
        "🤖 I understand you're asking about \"{utterance}\". I can help with:\n\
         • Class schedules and bookings\n\
         • Fitness tips and workout advice\n\
         • Nutrition recommendations\n\
         • Instructor information\n\
         • Goal-specific training plans\n\
         \n\
         What specific aspect interests you most? 💪"
    )
}
