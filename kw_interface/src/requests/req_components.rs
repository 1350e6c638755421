#[derive(Clone, Debug, PartialEq)]
pub struct RequestConfig {
    /// Maximum number of tokens the model may generate for one completion.
    ///
    /// Corresponds to the 'max_tokens' parameter of OpenAI API-compatible completions.
    ///
    /// Defaults to `60`.
    pub max_tokens: u64,
    /// Controls the randomness of the model's output.
    ///
    /// Accepts values between 0.0 and 2.0:
    /// - Higher values (e.g., 0.8) increase randomness, leading to more diverse outputs.
    /// - Lower values (e.g., 0.2) decrease randomness, resulting in more focused responses.
    ///
    /// Defaults to `0.5`.
    pub temperature: f32,
    /// Adjusts token selection based on their frequency in the generated text.
    ///
    /// Accepts values between -2.0 and 2.0. Positive values decrease the likelihood of
    /// repeating tokens, which keeps keyword lists from listing the same term twice.
    ///
    /// Defaults to `0.8`.
    pub frequency_penalty: f32,
    /// Adjusts token selection based on their presence in the generated text.
    ///
    /// Accepts values between -2.0 and 2.0.
    ///
    /// Defaults to `0.0`.
    pub presence_penalty: f32,
    /// Controls diversity via nucleus sampling. Between 0.0 and 1.0.
    ///
    /// Defaults to `1.0`.
    pub top_p: f32,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_tokens: 60,
            temperature: 0.5,
            frequency_penalty: 0.8,
            presence_penalty: 0.0,
            top_p: 1.0,
        }
    }
}

impl RequestConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

pub trait RequestConfigTrait {
    fn config(&mut self) -> &mut RequestConfig;

    /// Sets the value of [RequestConfig::max_tokens].
    fn max_tokens(&mut self, max_tokens: u64) -> &mut Self {
        self.config().max_tokens = max_tokens;
        self
    }

    /// Sets the value of [RequestConfig::frequency_penalty].
    fn frequency_penalty(&mut self, frequency_penalty: f32) -> &mut Self {
        match frequency_penalty {
            value if (-2.0..=2.0).contains(&value) => self.config().frequency_penalty = value,
            _ => self.config().frequency_penalty = 0.0,
        };
        self
    }

    /// Sets the value of [RequestConfig::presence_penalty].
    fn presence_penalty(&mut self, presence_penalty: f32) -> &mut Self {
        match presence_penalty {
            value if (-2.0..=2.0).contains(&value) => self.config().presence_penalty = value,
            _ => self.config().presence_penalty = 0.0,
        };
        self
    }

    /// Sets the value of [RequestConfig::temperature].
    fn temperature(&mut self, temperature: f32) -> &mut Self {
        match temperature {
            value if (0.0..=2.0).contains(&value) => self.config().temperature = value,
            _ => self.config().temperature = 1.0,
        };
        self
    }

    /// Sets the value of [RequestConfig::top_p].
    fn top_p(&mut self, top_p: f32) -> &mut Self {
        match top_p {
            value if (0.0..=1.0).contains(&value) => self.config().top_p = value,
            _ => self.config().top_p = 1.0,
        };
        self
    }
}

impl RequestConfigTrait for RequestConfig {
    fn config(&mut self) -> &mut RequestConfig {
        self
    }
}

impl std::fmt::Display for RequestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "    max_tokens: {}", self.max_tokens)?;
        writeln!(f, "    frequency_penalty: {:?}", self.frequency_penalty)?;
        writeln!(f, "    presence_penalty: {:?}", self.presence_penalty)?;
        writeln!(f, "    temperature: {:?}", self.temperature)?;
        writeln!(f, "    top_p: {:?}", self.top_p)
    }
}
