use crate::core::classifier::size_category;
use crate::domain::model::{ActivityLevel, PetProfile, PlanCategory, SizeCategory, Species};

/// 本地模板引擎。遠端 completion 失敗時的最後防線,
/// 所以這裡的每一條路徑都不准失敗:純字串組裝,沒有 I/O。
pub fn render(category: &PlanCategory, profile: &PetProfile) -> String {
    match category {
        PlanCategory::Nutrition => nutrition(profile),
        PlanCategory::Training => training(profile),
        PlanCategory::Health => health(profile),
        PlanCategory::Activities => activities(profile),
        PlanCategory::Grooming => grooming(profile),
        PlanCategory::Social => social(profile),
        PlanCategory::Other(name) => generic_category(name, profile),
    }
}

fn round(value: f64) -> i64 {
    value.round() as i64
}

/// 訓練/活動/美容/社交類別共用的結尾段落。
/// 營養與健康類別的備註是放在段落內,不走這裡。
fn trailing_considerations(notes: &Option<String>, placeholder: &str) -> String {
    match notes {
        Some(text) => format!("\n## Special Considerations\n{}\n", text),
        None => format!("\n*{}*\n", placeholder),
    }
}

// ---------------------------------------------------------------------------
// Nutrition
// ---------------------------------------------------------------------------

fn nutrition(profile: &PetProfile) -> String {
    match &profile.species {
        Species::Dog => nutrition_dog(profile),
        Species::Cat => nutrition_cat(profile),
        Species::Other(name) => generic_species("nutrition", name, profile),
    }
}

fn nutrition_dog(profile: &PetProfile) -> String {
    let per_meal = round(profile.weight * 0.15);
    let daily = round(profile.weight * 0.30);
    let size = size_category(&profile.species, profile.weight);

    let mut out = String::new();
    out.push_str(&format!("# Nutrition Plan for {}\n\n", profile.breed));
    out.push_str("## Daily Feeding Schedule\n");
    out.push_str(&format!(
        "- Morning meal: {} oz of high-quality dog food\n",
        per_meal
    ));
    out.push_str(&format!(
        "- Evening meal: {} oz of high-quality dog food\n",
        per_meal
    ));
    out.push_str(&format!("- Daily total: approximately {} oz\n\n", daily));

    match profile.activity {
        ActivityLevel::High | ActivityLevel::VeryHigh => {
            out.push_str(
                "Your dog has a high activity level - increase portions by 15-20% to match energy needs.\n\n",
            );
        }
        ActivityLevel::Low => {
            out.push_str(
                "Your dog has a low activity level - decrease portions by 10-15% to prevent weight gain.\n\n",
            );
        }
        ActivityLevel::Moderate => {
            out.push_str("Maintain standard portions for a moderately active dog.\n\n");
        }
    }

    out.push_str("## Life Stage Guidance\n");
    if profile.age_years < 2.0 {
        out.push_str(
            "Puppies need food formulated for growth - feed three to four smaller meals a day and choose a puppy-specific formula rich in protein and DHA.\n\n",
        );
    } else if profile.age_years > 7.0 {
        out.push_str(
            "Senior dogs benefit from easily digestible protein and joint-support supplements; watch calorie intake as metabolism slows.\n\n",
        );
    } else {
        out.push_str(
            "Adult dogs do well on two meals a day of a balanced maintenance formula.\n\n",
        );
    }

    out.push_str("## Hydration\n");
    out.push_str(&format!(
        "- Keep fresh water available at all times; {} breeds typically drink about {} oz per day\n\n",
        size.label(),
        round(profile.weight * 0.5)
    ));

    out.push_str("## Dietary Restrictions\n");
    match &profile.notes {
        Some(text) => out.push_str(&format!("{}\n\n", text)),
        None => out.push_str("No specific dietary restrictions noted.\n\n"),
    }

    out.push_str("## Foods to Avoid\n");
    out.push_str("- Chocolate, grapes, raisins, onions, garlic\n");
    out.push_str("- Xylitol-sweetened products\n");
    out.push_str("- Cooked bones and fatty table scraps\n");
    out
}

fn nutrition_cat(profile: &PetProfile) -> String {
    let per_meal = round(profile.weight * 0.10);
    let daily = round(profile.weight * 0.20);
    let size = size_category(&profile.species, profile.weight);

    let mut out = String::new();
    out.push_str(&format!("# Nutrition Plan for {}\n\n", profile.breed));
    out.push_str("## Daily Feeding Schedule\n");
    out.push_str(&format!(
        "- Morning meal: {} oz of high-protein cat food\n",
        per_meal
    ));
    out.push_str(&format!(
        "- Evening meal: {} oz of high-protein cat food\n",
        per_meal
    ));
    out.push_str(&format!("- Daily total: approximately {} oz\n\n", daily));

    match profile.activity {
        ActivityLevel::High | ActivityLevel::VeryHigh => {
            out.push_str(
                "Your cat is very active - increase portions by 10-15% to keep up with energy use.\n\n",
            );
        }
        ActivityLevel::Low => {
            out.push_str(
                "Your cat has a low activity level - decrease portions by 10-15% to avoid excess weight.\n\n",
            );
        }
        ActivityLevel::Moderate => {
            out.push_str("Maintain standard portions for a moderately active cat.\n\n");
        }
    }

    out.push_str("## Life Stage Guidance\n");
    if profile.age_years < 1.0 {
        out.push_str(
            "Kittens should eat kitten-formula food three to four times daily to support rapid growth.\n\n",
        );
    } else if profile.age_years > 10.0 {
        out.push_str(
            "Senior cats often need wet food for hydration and kidney support; discuss a senior formula with your veterinarian.\n\n",
        );
    } else {
        out.push_str(
            "Adult cats thrive on measured meals twice daily; avoid free-feeding to prevent obesity.\n\n",
        );
    }

    out.push_str("## Hydration\n");
    out.push_str(&format!(
        "- Cats are poor drinkers; a {} cat needs roughly {} oz of water daily, so consider a fountain or wet food\n\n",
        size.label(),
        round(profile.weight * 1.0)
    ));

    out.push_str("## Dietary Restrictions\n");
    match &profile.notes {
        Some(text) => out.push_str(&format!("{}\n\n", text)),
        None => out.push_str("No specific dietary restrictions noted.\n\n"),
    }

    out.push_str("## Foods to Avoid\n");
    out.push_str("- Onions, garlic, chives\n");
    out.push_str("- Raw dough, alcohol, caffeine\n");
    out.push_str("- Dog food as a staple (lacks taurine)\n");
    out
}

// ---------------------------------------------------------------------------
// Training
// ---------------------------------------------------------------------------

fn training(profile: &PetProfile) -> String {
    match &profile.species {
        Species::Dog => training_dog(profile),
        Species::Cat => training_cat(profile),
        Species::Other(name) => generic_species("training", name, profile),
    }
}

fn training_dog(profile: &PetProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Training Plan for {}\n\n", profile.breed));

    out.push_str("## Session Structure\n");
    if profile.age_years < 2.0 {
        out.push_str(
            "- Young dogs learn fastest in short bursts: three 5-10 minute sessions per day\n- Focus on name recognition, sit, and loose-leash basics\n\n",
        );
    } else if profile.age_years > 7.0 {
        out.push_str(
            "- Keep sessions gentle and short (10 minutes) to respect aging joints\n- Reinforce known commands rather than introducing demanding new tricks\n\n",
        );
    } else {
        out.push_str(
            "- Two 15-20 minute sessions per day work well for adult dogs\n- Alternate obedience drills with trick training to keep engagement high\n\n",
        );
    }

    out.push_str("## Core Commands\n");
    out.push_str("1. Sit and stay\n");
    out.push_str("2. Recall (come)\n");
    out.push_str("3. Leave it / drop it\n");
    out.push_str("4. Loose-leash walking\n\n");

    out.push_str("## Energy Management\n");
    match profile.activity {
        ActivityLevel::High | ActivityLevel::VeryHigh => out.push_str(
            "A high-energy dog needs exercise before training; a tired dog focuses far better.\n",
        ),
        ActivityLevel::Low => out.push_str(
            "With a lower activity level, use food motivation generously and keep drills stationary.\n",
        ),
        ActivityLevel::Moderate => out.push_str(
            "Moderate energy is ideal for training; a short walk beforehand sharpens focus.\n",
        ),
    }

    out.push_str(&trailing_considerations(
        &profile.notes,
        "No specific training considerations noted.",
    ));
    out
}

fn training_cat(profile: &PetProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Training Plan for {}\n\n", profile.breed));

    out.push_str("## Session Structure\n");
    if profile.age_years < 2.0 {
        out.push_str(
            "- Kittens and young cats respond well to 3-5 minute clicker sessions, twice daily\n- Prioritize litter box habits and carrier comfort early\n\n",
        );
    } else if profile.age_years > 7.0 {
        out.push_str(
            "- Older cats can still learn; keep sessions under 5 minutes and rely on high-value treats\n\n",
        );
    } else {
        out.push_str(
            "- One or two 5-minute clicker sessions per day suit adult cats\n- Capture natural behaviors (sitting, touching a target) and reward immediately\n\n",
        );
    }

    out.push_str("## Useful Behaviors\n");
    out.push_str("1. Come when called\n");
    out.push_str("2. Target touch (nose to stick)\n");
    out.push_str("3. Calm carrier entry\n");
    out.push_str("4. Scratching post redirection\n\n");

    out.push_str("## Motivation\n");
    match profile.activity {
        ActivityLevel::High | ActivityLevel::VeryHigh => out.push_str(
            "Channel that energy: wand-toy play before sessions makes treat rewards more effective.\n",
        ),
        ActivityLevel::Low => out.push_str(
            "For a laid-back cat, train right before mealtimes when food motivation peaks.\n",
        ),
        ActivityLevel::Moderate => out.push_str(
            "Mix play rewards with food rewards to find what your cat values most.\n",
        ),
    }

    out.push_str(&trailing_considerations(
        &profile.notes,
        "No specific training considerations noted.",
    ));
    out
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

fn health(profile: &PetProfile) -> String {
    match &profile.species {
        Species::Dog => health_dog(profile),
        Species::Cat => health_cat(profile),
        Species::Other(name) => generic_species("health", name, profile),
    }
}

fn health_dog(profile: &PetProfile) -> String {
    let size = size_category(&profile.species, profile.weight);

    let mut out = String::new();
    out.push_str(&format!("# Health Plan for {}\n\n", profile.breed));

    out.push_str("## Veterinary Schedule\n");
    if profile.age_years < 1.0 {
        out.push_str(
            "- Puppies need a vaccination series at 8, 12, and 16 weeks, then boosters at one year\n- Monthly weight checks during the growth phase\n\n",
        );
    } else if profile.age_years > 7.0 {
        out.push_str(
            "- Senior dogs should see the veterinarian twice a year with annual bloodwork\n- Screen for arthritis, dental disease, and organ function\n\n",
        );
    } else {
        out.push_str(
            "- Annual wellness exam with core vaccine boosters as scheduled\n- Yearly dental check and heartworm test\n\n",
        );
    }

    out.push_str("## Weight Management\n");
    out.push_str(&format!(
        "Current weight is {} units; for a {} dog, keep monthly weigh-ins within about 10% of this baseline and adjust food before drift becomes obesity.\n\n",
        round(profile.weight),
        size.label()
    ));

    out.push_str("## Preventive Care\n");
    out.push_str("- Monthly flea, tick, and heartworm prevention dosed by weight\n");
    out.push_str("- Brush teeth several times a week\n");
    out.push_str("- Trim nails every 3-4 weeks\n\n");

    out.push_str("## Health Concerns\n");
    match &profile.notes {
        Some(text) => out.push_str(&format!("{}\n", text)),
        None => out.push_str("No specific health concerns noted.\n"),
    }
    out
}

fn health_cat(profile: &PetProfile) -> String {
    let size = size_category(&profile.species, profile.weight);

    let mut out = String::new();
    out.push_str(&format!("# Health Plan for {}\n\n", profile.breed));

    out.push_str("## Veterinary Schedule\n");
    if profile.age_years < 1.0 {
        out.push_str(
            "- Kittens need vaccinations at 8, 12, and 16 weeks plus deworming\n- Spay/neuter discussion around 5-6 months\n\n",
        );
    } else if profile.age_years > 7.0 {
        out.push_str(
            "- Mature cats benefit from twice-yearly exams with kidney and thyroid screening\n\n",
        );
    } else {
        out.push_str("- Annual wellness exam with core vaccines and a dental assessment\n\n");
    }

    out.push_str("## Weight Management\n");
    out.push_str(&format!(
        "Current weight is {} units; a {} cat hides weight change under fur, so run a monthly rib check by touch.\n\n",
        round(profile.weight),
        size.label()
    ));

    out.push_str("## Preventive Care\n");
    out.push_str("- Flea prevention year-round, even for indoor cats\n");
    out.push_str("- Fresh litter daily; changes in box habits are an early illness signal\n");
    out.push_str("- Watch water intake - increased thirst warrants a vet visit\n\n");

    out.push_str("## Health Concerns\n");
    match &profile.notes {
        Some(text) => out.push_str(&format!("{}\n", text)),
        None => out.push_str("No specific health concerns noted.\n"),
    }
    out
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

fn activities(profile: &PetProfile) -> String {
    match &profile.species {
        Species::Dog => activities_dog(profile),
        Species::Cat => activities_cat(profile),
        Species::Other(name) => generic_species("activities", name, profile),
    }
}

fn activities_dog(profile: &PetProfile) -> String {
    let size = size_category(&profile.species, profile.weight);
    let daily_minutes = match profile.activity {
        ActivityLevel::Low => 30,
        ActivityLevel::Moderate => 60,
        ActivityLevel::High => 90,
        ActivityLevel::VeryHigh => 120,
    };

    let mut out = String::new();
    out.push_str(&format!("# Activity Plan for {}\n\n", profile.breed));

    out.push_str("## Daily Exercise Target\n");
    out.push_str(&format!(
        "- Aim for about {} minutes of activity per day, split into at least two outings\n\n",
        daily_minutes
    ));

    out.push_str("## Suggested Activities\n");
    match size {
        SizeCategory::Small => {
            out.push_str("- Indoor fetch and puzzle feeders\n- Short neighborhood walks\n\n")
        }
        SizeCategory::Medium => {
            out.push_str("- Brisk walks and off-leash play in fenced areas\n- Beginner agility or scent games\n\n")
        }
        SizeCategory::Large | SizeCategory::ExtraLarge => {
            out.push_str("- Long walks, hikes, and swimming where available\n- Fetch with distance throws; avoid repetitive stair sprints\n\n")
        }
    }

    out.push_str("## Age Adjustments\n");
    if profile.age_years < 2.0 {
        out.push_str(
            "Growing joints are fragile: keep sessions short and avoid forced running until growth plates close.\n",
        );
    } else if profile.age_years > 8.0 {
        out.push_str(
            "Older dogs still need daily movement; swap high-impact games for sniff walks and swimming.\n",
        );
    } else {
        out.push_str("An adult dog can handle the full target; build intensity gradually.\n");
    }

    out.push_str(&trailing_considerations(
        &profile.notes,
        "No specific activity considerations noted.",
    ));
    out
}

fn activities_cat(profile: &PetProfile) -> String {
    let sessions = match profile.activity {
        ActivityLevel::Low => 2,
        ActivityLevel::Moderate => 3,
        ActivityLevel::High | ActivityLevel::VeryHigh => 4,
    };

    let mut out = String::new();
    out.push_str(&format!("# Activity Plan for {}\n\n", profile.breed));

    out.push_str("## Daily Play Target\n");
    out.push_str(&format!(
        "- Schedule {} interactive play sessions of 10-15 minutes each day\n\n",
        sessions
    ));

    out.push_str("## Suggested Activities\n");
    out.push_str("- Wand-toy chases that end with a \"catch\" to avoid frustration\n");
    out.push_str("- Food puzzles and treat-hiding games\n");
    out.push_str("- Vertical space: cat trees and window perches\n\n");

    out.push_str("## Age Adjustments\n");
    if profile.age_years < 1.0 {
        out.push_str(
            "Kittens play in frantic bursts; supervise climbing and rotate toys to prevent boredom.\n",
        );
    } else if profile.age_years > 10.0 {
        out.push_str(
            "Senior cats prefer ground-level games; ramps to favorite perches keep them moving without jumps.\n",
        );
    } else {
        out.push_str("Adult cats hunt best at dawn and dusk - time play sessions accordingly.\n");
    }

    out.push_str(&trailing_considerations(
        &profile.notes,
        "No specific activity considerations noted.",
    ));
    out
}

// ---------------------------------------------------------------------------
// Grooming
// ---------------------------------------------------------------------------

fn grooming(profile: &PetProfile) -> String {
    match &profile.species {
        Species::Dog => grooming_dog(profile),
        Species::Cat => grooming_cat(profile),
        Species::Other(name) => generic_species("grooming", name, profile),
    }
}

fn grooming_dog(profile: &PetProfile) -> String {
    let size = size_category(&profile.species, profile.weight);

    let mut out = String::new();
    out.push_str(&format!("# Grooming Plan for {}\n\n", profile.breed));

    out.push_str("## Routine\n");
    out.push_str("- Brush 2-3 times per week, daily during seasonal shedding\n");
    out.push_str("- Bathe every 4-6 weeks with dog-specific shampoo\n");
    out.push_str(&format!(
        "- Nail trims every 3-4 weeks; {} dogs wear nails down {} on pavement walks\n\n",
        size.label(),
        match size {
            SizeCategory::Small => "slowly, so check weekly",
            _ => "faster, but still check monthly",
        }
    ));

    out.push_str("## Ears and Teeth\n");
    out.push_str("- Wipe ears weekly and dry them after swimming\n");
    out.push_str("- Brush teeth several times a week with enzymatic toothpaste\n\n");

    out.push_str("## Age Notes\n");
    if profile.age_years < 1.0 {
        out.push_str(
            "Start handling paws, ears, and muzzle now - a puppy that tolerates grooming becomes an easy adult.\n",
        );
    } else if profile.age_years > 7.0 {
        out.push_str(
            "Use a non-slip mat and shorter sessions; older skin is thinner and mats pull harder.\n",
        );
    } else {
        out.push_str("Keep sessions positive with treats; end before your dog gets restless.\n");
    }

    out.push_str(&trailing_considerations(
        &profile.notes,
        "No specific grooming considerations noted.",
    ));
    out
}

fn grooming_cat(profile: &PetProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Grooming Plan for {}\n\n", profile.breed));

    out.push_str("## Routine\n");
    out.push_str("- Brush 1-2 times per week for short coats, daily for long coats\n");
    out.push_str("- Baths are rarely needed; spot-clean unless heavily soiled\n");
    out.push_str("- Trim claws every 2-3 weeks; reward each paw\n\n");

    out.push_str("## Problem Areas\n");
    out.push_str("- Check behind ears and under legs for mats\n");
    out.push_str("- Hairball frequency above weekly warrants more brushing or a vet chat\n\n");

    out.push_str("## Age Notes\n");
    if profile.age_years < 2.0 {
        out.push_str(
            "Young cats groom themselves well; your job is habituation - short, treat-heavy handling sessions.\n",
        );
    } else if profile.age_years > 10.0 {
        out.push_str(
            "Arthritic cats stop reaching their back and hips; gentle daily brushing prevents painful mats.\n",
        );
    } else {
        out.push_str("Healthy adults mostly self-maintain; brushing is bonding plus shed control.\n");
    }

    out.push_str(&trailing_considerations(
        &profile.notes,
        "No specific grooming considerations noted.",
    ));
    out
}

// ---------------------------------------------------------------------------
// Social
// ---------------------------------------------------------------------------

fn social(profile: &PetProfile) -> String {
    match &profile.species {
        Species::Dog => social_dog(profile),
        Species::Cat => social_cat(profile),
        Species::Other(name) => generic_species("social", name, profile),
    }
}

fn social_dog(profile: &PetProfile) -> String {
    let size = size_category(&profile.species, profile.weight);

    let mut out = String::new();
    out.push_str(&format!("# Socialization Plan for {}\n\n", profile.breed));

    out.push_str("## Exposure Goals\n");
    if profile.age_years < 2.0 {
        out.push_str(
            "- The socialization window is still open: introduce new people, surfaces, and sounds weekly\n- Keep every first encounter positive and short\n\n",
        );
    } else if profile.age_years > 7.0 {
        out.push_str(
            "- Older dogs prefer familiar companions; maintain existing friendships over new introductions\n\n",
        );
    } else {
        out.push_str(
            "- Maintain social skills with regular, structured meetups and calm on-leash greetings\n\n",
        );
    }

    out.push_str("## Venues\n");
    out.push_str(&format!(
        "- Choose play groups matched to a {} dog's size to avoid accidental injury\n",
        size.label()
    ));
    out.push_str("- Parallel walks are a low-pressure way to meet new dogs\n");
    out.push_str("- Watch body language and leave before arousal tips into tension\n");

    out.push_str(&trailing_considerations(
        &profile.notes,
        "No specific social considerations noted.",
    ));
    out
}

fn social_cat(profile: &PetProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Socialization Plan for {}\n\n", profile.breed));

    out.push_str("## Exposure Goals\n");
    if profile.age_years < 2.0 {
        out.push_str(
            "- Handle daily and invite calm visitors; early positive exposure shapes a confident adult cat\n\n",
        );
    } else if profile.age_years > 10.0 {
        out.push_str(
            "- Respect a senior cat's routine; new animals or furniture moves deserve slow, scent-first introductions\n\n",
        );
    } else {
        out.push_str(
            "- Adult cats socialize on their own terms: provide retreat spaces and never force interaction\n\n",
        );
    }

    out.push_str("## Introductions\n");
    out.push_str("- New pets: separate rooms first, swap bedding, then visual contact through a gate\n");
    out.push_str("- Guests should ignore the cat until the cat approaches\n");
    out.push_str("- A second litter box and feeding station prevent resource tension in multi-cat homes\n");

    out.push_str(&trailing_considerations(
        &profile.notes,
        "No specific social considerations noted.",
    ));
    out
}

// ---------------------------------------------------------------------------
// Generic fallbacks
// ---------------------------------------------------------------------------

/// dog/cat 以外的種類共用這個模板,不分類別深度客製,
/// 只回顯輸入並提醒找專科。
fn generic_species(category_label: &str, species_name: &str, profile: &PetProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# {} Plan for your {}\n\n",
        capitalize(category_label),
        species_name
    ));
    out.push_str("## Profile\n");
    out.push_str(&format!("- Species: {}\n", species_name));
    out.push_str(&format!("- Breed: {}\n", profile.breed));
    out.push_str(&format!("- Age: {} years\n", profile.age_years));
    out.push_str(&format!("- Weight: {} units\n", profile.weight));
    out.push_str(&format!("- Activity level: {}\n\n", profile.activity.label()));

    out.push_str(&format!(
        "Care requirements vary widely between species. Please consult a veterinarian or specialist experienced with {} care for {} guidance tailored to your pet.\n",
        species_name, category_label
    ));

    if let Some(notes) = &profile.notes {
        out.push_str(&format!("\n## Special Considerations\n{}\n", notes));
    }
    out
}

/// 未知的計畫類別:回顯原始輸入,標題帶上原始類別名稱。
fn generic_category(category_name: &str, profile: &PetProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# {} Plan for {}\n\n",
        capitalize(category_name),
        profile.breed
    ));
    out.push_str("## Profile\n");
    out.push_str(&format!("- Species: {}\n", profile.species.label()));
    out.push_str(&format!("- Breed: {}\n", profile.breed));
    out.push_str(&format!("- Age: {} years\n", profile.age_years));
    out.push_str(&format!("- Weight: {} units\n", profile.weight));
    out.push_str(&format!("- Activity level: {}\n\n", profile.activity.label()));

    if let Some(notes) = &profile.notes {
        out.push_str(&format!("## Special Considerations\n{}\n\n", notes));
    }

    out.push_str(&format!(
        "Please research the specific {} needs of your pet or consult a professional for detailed advice.\n",
        category_name
    ));
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
