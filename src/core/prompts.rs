use crate::domain::model::{PetProfile, PlanCategory};

/// 每個類別一組 system/user 指令,送給遠端 completion 服務。
#[derive(Debug, Clone)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

pub fn build_prompts(category: &PlanCategory, profile: &PetProfile) -> PromptPair {
    PromptPair {
        system: system_prompt(category),
        user: user_prompt(category, profile),
    }
}

fn system_prompt(category: &PlanCategory) -> String {
    let persona = match category {
        PlanCategory::Nutrition => {
            "You are a professional pet nutritionist. Create a detailed, practical diet plan with specific portion sizes and feeding schedules."
        }
        PlanCategory::Training => {
            "You are a certified professional pet trainer. Create a positive-reinforcement training plan with concrete daily exercises."
        }
        PlanCategory::Health => {
            "You are a veterinary care advisor. Create a preventive health plan with checkup schedules and warning signs to watch for. Do not diagnose conditions."
        }
        PlanCategory::Activities => {
            "You are a pet exercise and enrichment specialist. Create an activity plan with daily exercise targets suited to the pet's age and energy."
        }
        PlanCategory::Grooming => {
            "You are a professional pet groomer. Create a grooming routine covering coat, nails, ears, and teeth."
        }
        PlanCategory::Social => {
            "You are a pet behaviorist. Create a socialization plan with safe, gradual exposure exercises."
        }
        PlanCategory::Other(_) => {
            "You are a knowledgeable pet care advisor. Create a practical care plan for the requested topic."
        }
    };
    format!(
        "{} Format the answer in markdown with headings and bullet points.",
        persona
    )
}

fn user_prompt(category: &PlanCategory, profile: &PetProfile) -> String {
    let mut prompt = format!(
        "Create a {} plan for my {}, a {} aged {} years, weighing {} units, with {} activity level.",
        category.label(),
        profile.species.label(),
        profile.breed,
        profile.age_years,
        profile.weight,
        profile.activity.label()
    );
    if let Some(notes) = &profile.notes {
        prompt.push_str(&format!(" Special considerations: {}.", notes));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PetProfile;

    #[test]
    fn prompts_interpolate_profile_fields() {
        let profile =
            PetProfile::from_raw("dog", "Labrador", "3", "60", "High", Some("hip dysplasia"));
        let pair = build_prompts(&PlanCategory::Nutrition, &profile);

        assert!(pair.system.contains("professional pet nutritionist"));
        assert!(pair.user.contains("Labrador"));
        assert!(pair.user.contains("3 years"));
        assert!(pair.user.contains("60 units"));
        assert!(pair.user.contains("hip dysplasia"));
    }

    #[test]
    fn unknown_category_gets_generic_persona() {
        let profile = PetProfile::from_raw("cat", "Tabby", "2", "9", "Low", None);
        let pair = build_prompts(&PlanCategory::Other("travel".to_string()), &profile);
        assert!(pair.system.contains("knowledgeable pet care advisor"));
        assert!(pair.user.contains("travel plan"));
    }
}
