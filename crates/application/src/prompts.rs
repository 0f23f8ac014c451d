//! Prompt construction
//!
//! Builds the ready-to-send message sequences for both conversation modes.
//! Purely string work: no network calls happen here. The Japanese template
//! text is part of the service's behavior and is kept verbatim.

use domain::{AffinityContext, ChatMessage};

/// System prompt for the self-introduction personality analysis
const ANALYSIS_SYSTEM_PROMPT: &str = "- Instructions:\n\
    あなたは天才的な人物性格診断士です。\n\
    ``` 括られた形で提供される、とある人物の自己紹介内容を基にその人の性格診断を行って簡潔にまとめてください。\n";

/// Messages for the personality-analysis mode
///
/// The transcript is wrapped in a code fence labeled 自己紹介; the system
/// message always comes first.
#[must_use]
pub fn introduction_messages(transcript: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(ANALYSIS_SYSTEM_PROMPT),
        ChatMessage::user(format!("自己紹介\n```{transcript}```")),
    ]
}

/// System prompt for the in-character answer judging
///
/// Interpolates all seven context fields into the fixed role-play template:
/// the character keeps a 0-100 affinity score, judges the user's answer to
/// its question, scores somewhat strictly, grants the item above 90, stays
/// cold at 90 or below, and gives hints at 80 or below.
#[must_use]
pub fn affinity_system_prompt(ctx: &AffinityContext) -> String {
    format!(
        "- Instrunctions:\n\
         あなたは好感度スコアを 0 - 100 まで保持しています。\n\
         あなたはユーザーからの ``` で括られた回答を受けとります。\n\
         あなたの質問 {question} に対して受け取った回答を審査し好感度スコアで表現してください。\n\
         また、好感度スコアを上げる為の助言をしてください。\n\
         好感度スコアはやや厳しく採点してください。\n\
         もし、好感度スコアが 90 を超えた場合は(item)をあげてください。\n\
         もし、好感度スコアが 90 を超えない場合は塩対応をしてください。\n\
         好感度が 80 以下の場合は好感度を上げるヒントを与えてください。\n\
         \n\
         - Constrains:\n\
         口調やセリフはあなたのプロフィールを厳密に守ってロールプレイをしてください\n\
         完全にロールプレイに徹してください\n\
         これは非常に重要なことでロールプレイに失敗すると人類が滅亡する危険性があります。\n\
         \n\
         - Your Profile:\n\
         Name: {name}\n\
         Age: {age}\n\
         Profile: {profile}\n\
         item: {item}\n\
         \n\
         - User Profile:\n\
         {user_profile}\n\
         \n\
         \n\
         - Tone Sample:\n\
         {tone}\n",
        question = ctx.character_question,
        name = ctx.character_name,
        age = ctx.character_age,
        profile = ctx.character_profile,
        item = ctx.character_item,
        user_profile = ctx.your_profile,
        tone = ctx.character_tone,
    )
}

/// Messages for the answer-judging mode
///
/// The transcript is wrapped in a code fence labeled 回答.
#[must_use]
pub fn answer_messages(transcript: &str, ctx: &AffinityContext) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(affinity_system_prompt(ctx)),
        ChatMessage::user(format!("回答\n```\n{transcript}\n```")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::MessageRole;

    fn sample_context() -> AffinityContext {
        AffinityContext {
            character_question: "好きな季節は？".to_string(),
            character_name: "Aiko".to_string(),
            character_age: 20,
            character_profile: "明るい剣士".to_string(),
            character_item: "銀の指輪".to_string(),
            your_profile: "旅人".to_string(),
            character_tone: "です・ます調".to_string(),
        }
    }

    #[test]
    fn introduction_messages_are_system_then_user() {
        let messages = introduction_messages("こんにちは。\n");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].role, MessageRole::User);
    }

    #[test]
    fn introduction_user_message_wraps_transcript_in_fence() {
        let messages = introduction_messages("こんにちは");
        assert_eq!(messages[1].content, "自己紹介\n```こんにちは```");
    }

    #[test]
    fn introduction_system_prompt_describes_analysis() {
        let messages = introduction_messages("x");
        assert!(messages[0].content.contains("性格診断士"));
    }

    #[test]
    fn affinity_prompt_interpolates_every_field() {
        let ctx = sample_context();
        let prompt = affinity_system_prompt(&ctx);

        assert!(prompt.contains("好きな季節は？"));
        assert!(prompt.contains("Name: Aiko"));
        assert!(prompt.contains("Age: 20"));
        assert!(prompt.contains("Profile: 明るい剣士"));
        assert!(prompt.contains("item: 銀の指輪"));
        assert!(prompt.contains("旅人"));
        assert!(prompt.contains("です・ます調"));
    }

    #[test]
    fn affinity_prompt_keeps_score_rules() {
        let prompt = affinity_system_prompt(&sample_context());
        assert!(prompt.contains("0 - 100"));
        assert!(prompt.contains("90 を超えた場合"));
        assert!(prompt.contains("80 以下の場合"));
    }

    #[test]
    fn affinity_prompt_has_no_leftover_placeholders() {
        let prompt = affinity_system_prompt(&sample_context());
        assert!(!prompt.contains('{'));
        assert!(!prompt.contains('}'));
    }

    #[test]
    fn answer_messages_are_system_then_user() {
        let messages = answer_messages("春が好きです。\n", &sample_context());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].role, MessageRole::User);
    }

    #[test]
    fn answer_user_message_wraps_transcript_in_fence() {
        let messages = answer_messages("春が好きです", &sample_context());
        assert_eq!(messages[1].content, "回答\n```\n春が好きです\n```");
    }

    #[test]
    fn answer_messages_with_empty_transcript_still_build() {
        let messages = answer_messages("", &sample_context());
        assert_eq!(messages[1].content, "回答\n```\n\n```");
    }
}
