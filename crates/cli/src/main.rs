//! Fit Veda authoring console.
//!
//! The command-line view layer over the form engine: each subcommand opens
//! a form store, feeds it the given field values, and submits the finished
//! draft. Accepted submissions are recorded in the log and acknowledged on
//! stdout; validation failures are printed per field and leave nothing
//! submitted.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitveda_core::blog::{BlogDraft, BlogField};
use fitveda_core::diet::{DietPlanDraft, DietPlanField, MealField};
use fitveda_core::exercise::{ExerciseDraft, ExerciseField};
use fitveda_core::{
    youtube_thumbnail_url, AuthoringConfig, FormError, FormStateStore, SubmissionEvent,
    SubmissionPipeline,
};
use fitveda_preview::ImageFile;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fitveda")]
#[command(about = "Fit Veda content authoring console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Author and submit a new exercise
    AddExercise {
        /// Exercise name
        #[arg(long)]
        name: String,
        /// Exercise category
        #[arg(long)]
        category: Option<String>,
        /// Target muscle (repeatable)
        #[arg(long = "muscle")]
        muscles: Vec<String>,
        /// Equipment needed (repeatable)
        #[arg(long = "equipment")]
        equipment: Vec<String>,
        /// Difficulty level
        #[arg(long)]
        difficulty: Option<String>,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// YouTube video URL
        #[arg(long)]
        youtube_url: Option<String>,
        /// Path to an illustration image
        #[arg(long)]
        image: Option<PathBuf>,
        /// Instruction step, in order (repeatable)
        #[arg(long = "step")]
        steps: Vec<String>,
        /// Tips and precautions
        #[arg(long)]
        tips: Option<String>,
        /// Common mistakes
        #[arg(long)]
        mistakes: Option<String>,
        /// Duration in seconds
        #[arg(long)]
        duration_secs: Option<u32>,
        /// Number of sets
        #[arg(long)]
        sets: Option<u32>,
        /// Repetitions per set
        #[arg(long)]
        reps: Option<u32>,
        /// Rest time in seconds
        #[arg(long)]
        rest_secs: Option<u32>,
        /// Calories burned
        #[arg(long)]
        calories: Option<u32>,
        /// Suitable-for group (repeatable)
        #[arg(long = "suitable-for")]
        suitable_for: Vec<String>,
        /// Linked diet plan (repeatable)
        #[arg(long = "diet-plan")]
        diet_plans: Vec<String>,
    },
    /// Author and submit a new diet plan
    AddDietPlan {
        /// Diet plan name
        #[arg(long)]
        name: String,
        /// Associated exercise (repeatable)
        #[arg(long = "exercise")]
        exercises: Vec<String>,
        /// Goal
        #[arg(long)]
        goal: Option<String>,
        /// Duration in days
        #[arg(long)]
        duration_days: Option<u32>,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Meal as comma-separated key=value pairs, in serving order
        /// (repeatable): name, time, items, calories, carbs, protein, fat,
        /// image
        #[arg(long = "meal")]
        meals: Vec<String>,
        /// Tips and precautions
        #[arg(long)]
        tips: Option<String>,
        /// Water intake in litres
        #[arg(long)]
        water_litres: Option<f64>,
        /// Supplements
        #[arg(long)]
        supplements: Option<String>,
        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Author and submit a new blog post
    AddBlog {
        /// Blog title
        #[arg(long)]
        title: String,
        /// Path to the cover image
        #[arg(long)]
        cover: Option<PathBuf>,
        /// Post content
        #[arg(long)]
        content: Option<String>,
        /// Tag or #hashtag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// One-click trending tag (repeatable)
        #[arg(long = "trending-tag")]
        trending_tags: Vec<String>,
        /// Blog category
        #[arg(long)]
        category: Option<String>,
        /// Author display name
        #[arg(long)]
        author: Option<String>,
        /// Publish date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        publish_date: Option<NaiveDate>,
        /// Visibility
        #[arg(long)]
        visibility: Option<String>,
        /// SEO meta title
        #[arg(long)]
        meta_title: Option<String>,
        /// SEO meta description
        #[arg(long)]
        meta_description: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitveda_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::AddExercise {
            name,
            category,
            muscles,
            equipment,
            difficulty,
            description,
            youtube_url,
            image,
            steps,
            tips,
            mistakes,
            duration_secs,
            sets,
            reps,
            rest_secs,
            calories,
            suitable_for,
            diet_plans,
        } => {
            let mut store: FormStateStore<ExerciseDraft> = FormStateStore::open();
            store.update(ExerciseField::Name(name))?;
            if let Some(category) = category {
                store.update(ExerciseField::Category(category))?;
            }
            if !muscles.is_empty() {
                store.update(ExerciseField::TargetMuscles(muscles))?;
            }
            if !equipment.is_empty() {
                store.update(ExerciseField::Equipment(equipment))?;
            }
            if let Some(difficulty) = difficulty {
                store.update(ExerciseField::Difficulty(difficulty))?;
            }
            if let Some(description) = description {
                store.update(ExerciseField::Description(description))?;
            }
            if let Some(url) = youtube_url {
                store.update(ExerciseField::YoutubeUrl(url))?;
            }
            if let Some(path) = image {
                let file = load_image(&path)?;
                store.update(ExerciseField::Image(Some(file)))?;
            }
            for (index, step) in steps.into_iter().enumerate() {
                if index > 0 {
                    store.update(ExerciseField::AppendStep)?;
                }
                store.update(ExerciseField::Step(index, step))?;
            }
            store.update(ExerciseField::Tips(tips.unwrap_or_default()))?;
            store.update(ExerciseField::Mistakes(mistakes.unwrap_or_default()))?;
            store.update(ExerciseField::DurationSecs(duration_secs))?;
            store.update(ExerciseField::Sets(sets))?;
            store.update(ExerciseField::Reps(reps))?;
            store.update(ExerciseField::RestSecs(rest_secs))?;
            store.update(ExerciseField::Calories(calories))?;
            if !suitable_for.is_empty() {
                store.update(ExerciseField::SuitableFor(suitable_for))?;
            }
            if !diet_plans.is_empty() {
                store.update(ExerciseField::DietPlans(diet_plans))?;
            }

            // Unparseable URLs simply show no preview.
            if let Some(thumbnail) = youtube_thumbnail_url(&store.draft().youtube_url) {
                println!("Video thumbnail preview: {thumbnail}");
            }

            submit(store.into_draft().into())
        }
        Commands::AddDietPlan {
            name,
            exercises,
            goal,
            duration_days,
            description,
            meals,
            tips,
            water_litres,
            supplements,
            notes,
        } => {
            let mut store: FormStateStore<DietPlanDraft> = FormStateStore::open();
            store.update(DietPlanField::Name(name))?;
            if !exercises.is_empty() {
                store.update(DietPlanField::Exercises(exercises))?;
            }
            if let Some(goal) = goal {
                store.update(DietPlanField::Goal(goal))?;
            }
            store.update(DietPlanField::DurationDays(duration_days))?;
            if let Some(description) = description {
                store.update(DietPlanField::Description(description))?;
            }
            for (index, spec) in meals.iter().enumerate() {
                if index > 0 {
                    store.update(DietPlanField::AppendMeal)?;
                }
                for field in meal_fields(spec)? {
                    store.update(DietPlanField::Meal(index, field))?;
                }
            }
            store.update(DietPlanField::Tips(tips.unwrap_or_default()))?;
            store.update(DietPlanField::WaterLitres(water_litres))?;
            store.update(DietPlanField::Supplements(supplements.unwrap_or_default()))?;
            store.update(DietPlanField::Notes(notes.unwrap_or_default()))?;

            submit(store.into_draft().into())
        }
        Commands::AddBlog {
            title,
            cover,
            content,
            tags,
            trending_tags,
            category,
            author,
            publish_date,
            visibility,
            meta_title,
            meta_description,
        } => {
            let config = match author {
                Some(author) => AuthoringConfig::new(author)?,
                None => AuthoringConfig::default(),
            };
            let mut store = FormStateStore::with_draft(BlogDraft::for_author(&config));

            store.update(BlogField::Title(title))?;
            if let Some(content) = content {
                store.update(BlogField::Content(content))?;
            }
            for tag in tags {
                store.update(BlogField::TagBuffer(tag))?;
                store.update(BlogField::CommitTag)?;
            }
            for tag in trending_tags {
                anyhow::ensure!(
                    fitveda_core::enumerations::TRENDING_TAGS.contains(&tag.as_str()),
                    "{tag:?} is not a trending tag suggestion"
                );
                store.update(BlogField::AddTagFromSuggestion(tag))?;
            }
            if let Some(category) = category {
                store.update(BlogField::Category(category))?;
            }
            if let Some(date) = publish_date {
                store.update(BlogField::PublishDate(date))?;
            }
            if let Some(visibility) = visibility {
                store.update(BlogField::Visibility(visibility))?;
            }
            store.update(BlogField::MetaTitle(meta_title.unwrap_or_default()))?;
            store.update(BlogField::MetaDescription(
                meta_description.unwrap_or_default(),
            ))?;

            if let Some(path) = cover {
                let file = load_image(&path)?;
                let request = store.transition(|draft| draft.set_cover(Some(file)));
                if let Some(request) = request {
                    let decoded = request.decode().await?;
                    store.transition(|draft| (draft.apply_cover(decoded), ()));
                }
                if let Some(preview) = store.draft().cover.preview() {
                    println!("Cover preview decoded ({})", preview.media_type);
                }
            }

            submit(store.into_draft().into())
        }
    }
}

/// Validates and submits one finished draft, reporting the outcome.
fn submit(event: SubmissionEvent) -> anyhow::Result<()> {
    let mut pipeline = SubmissionPipeline::default();
    match pipeline.submit(&event) {
        Ok(receipt) => {
            println!("{}", receipt.notification);
            Ok(())
        }
        Err(FormError::Validation(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("  {field}: {message}");
            }
            anyhow::bail!("draft rejected: {} field(s) failed validation", errors.len())
        }
        Err(other) => Err(other.into()),
    }
}

/// Reads an image from disk, applying the image-only gate before the file
/// is handed to the engine.
fn load_image(path: &Path) -> anyhow::Result<ImageFile> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read image file {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_owned();

    let file = ImageFile::new(filename, bytes);
    anyhow::ensure!(
        file.is_image(),
        "{} is not a recognised image file",
        path.display()
    );
    Ok(file)
}

/// Parses one `--meal` specification into meal field replacements.
fn meal_fields(spec: &str) -> anyhow::Result<Vec<MealField>> {
    let mut fields = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (key, value) = part
            .split_once('=')
            .with_context(|| format!("meal field {part:?} is not key=value"))?;

        let field = match key.trim() {
            "name" => MealField::Name(value.into()),
            "time" => MealField::Time(value.into()),
            "items" => MealField::Items(value.into()),
            "calories" => MealField::Calories(Some(parse_number(key, value)?)),
            "carbs" => MealField::CarbsG(Some(parse_number(key, value)?)),
            "protein" => MealField::ProteinG(Some(parse_number(key, value)?)),
            "fat" => MealField::FatG(Some(parse_number(key, value)?)),
            "image" => MealField::Image(Some(load_image(Path::new(value))?)),
            other => anyhow::bail!("unknown meal field {other:?}"),
        };
        fields.push(field);
    }
    Ok(fields)
}

fn parse_number(key: &str, value: &str) -> anyhow::Result<u32> {
    value
        .parse()
        .with_context(|| format!("meal field {key:?} expects a number, got {value:?}"))
}
