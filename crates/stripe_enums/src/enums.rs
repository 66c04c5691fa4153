/// Current status of a dispute.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DisputeStatus {
    ChargeRefunded,
    Lost,
    NeedsResponse,
    UnderReview,
    WarningClosed,
    WarningNeedsResponse,
    WarningUnderReview,
    Won,
}

impl DisputeStatus {
    /// Whether the dispute still accepts evidence.
    pub fn is_open(self) -> bool {
        matches!(
            self,
            Self::NeedsResponse
                | Self::UnderReview
                | Self::WarningNeedsResponse
                | Self::WarningUnderReview
        )
    }
}

/// Reason given by the cardholder for a dispute.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DisputeReason {
    BankCannotProcess,
    CheckReturned,
    CreditNotProcessed,
    CustomerInitiated,
    DebitNotAuthorized,
    Duplicate,
    Fraudulent,
    General,
    IncorrectAccountDetails,
    InsufficientFunds,
    ProductNotReceived,
    ProductUnacceptable,
    SubscriptionCanceled,
    Unrecognized,
    #[serde(other)]
    Unknown,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CardholderStatus {
    Active,
    Blocked,
    Inactive,
}

/// Status a cardholder can be created with or moved to. `blocked` is only ever set by the
/// platform.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SettableCardholderStatus {
    Active,
    Inactive,
}

impl From<SettableCardholderStatus> for CardholderStatus {
    fn from(status: SettableCardholderStatus) -> Self {
        match status {
            SettableCardholderStatus::Active => Self::Active,
            SettableCardholderStatus::Inactive => Self::Inactive,
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CardholderType {
    BusinessEntity,
    Individual,
}

/// Window a spending limit amount applies to.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SpendingLimitInterval {
    AllTime,
    Daily,
    Monthly,
    PerAuthorization,
    Weekly,
    Yearly,
}

/// Why a cardholder was disabled.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
pub enum DisabledReason {
    #[serde(rename = "listed")]
    #[strum(serialize = "listed")]
    Listed,
    #[serde(rename = "rejected.listed")]
    #[strum(serialize = "rejected.listed")]
    RejectedListed,
    #[serde(rename = "under_review")]
    #[strum(serialize = "under_review")]
    UnderReview,
}

/// Cardholder field that must be collected before the cardholder can be activated.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
pub enum PastDueField {
    #[serde(rename = "individual.dob.day")]
    #[strum(serialize = "individual.dob.day")]
    IndividualDobDay,
    #[serde(rename = "individual.dob.month")]
    #[strum(serialize = "individual.dob.month")]
    IndividualDobMonth,
    #[serde(rename = "individual.dob.year")]
    #[strum(serialize = "individual.dob.year")]
    IndividualDobYear,
    #[serde(rename = "individual.first_name")]
    #[strum(serialize = "individual.first_name")]
    IndividualFirstName,
    #[serde(rename = "individual.last_name")]
    #[strum(serialize = "individual.last_name")]
    IndividualLastName,
    #[serde(rename = "individual.verification.document")]
    #[strum(serialize = "individual.verification.document")]
    IndividualVerificationDocument,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethodType {
    Card,
    CardPresent,
    Ideal,
    SepaDebit,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CardBrand {
    Amex,
    Diners,
    Discover,
    Jcb,
    Mastercard,
    Unionpay,
    Visa,
    #[serde(other)]
    Unknown,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CardFunding {
    Credit,
    Debit,
    Prepaid,
    #[serde(other)]
    Unknown,
}

/// Outcome of an address or CVC check.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CheckResult {
    Pass,
    Failed,
    Unavailable,
    Unchecked,
    #[serde(other)]
    Unknown,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WalletType {
    AmexExpressCheckout,
    ApplePay,
    GooglePay,
    Masterpass,
    SamsungPay,
    VisaCheckout,
}

/// Customer's bank for iDEAL payments.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdealBank {
    AbnAmro,
    AsnBank,
    Bunq,
    Handelsbanken,
    Ing,
    Knab,
    Moneyou,
    Rabobank,
    Regiobank,
    SnsBank,
    TriodosBank,
    VanLanschot,
}

impl IdealBank {
    pub fn bic(self) -> IdealBic {
        match self {
            Self::AbnAmro => IdealBic::ABNANL2A,
            Self::AsnBank => IdealBic::ASNBNL21,
            Self::Bunq => IdealBic::BUNQNL2A,
            Self::Handelsbanken => IdealBic::HANDNL2A,
            Self::Ing => IdealBic::INGBNL2A,
            Self::Knab => IdealBic::KNABNL2H,
            Self::Moneyou => IdealBic::MOYONL21,
            Self::Rabobank => IdealBic::RABONL2U,
            Self::Regiobank => IdealBic::RBRBNL21,
            Self::SnsBank => IdealBic::SNSBNL2A,
            Self::TriodosBank => IdealBic::TRIONL2U,
            Self::VanLanschot => IdealBic::FVLBNL22,
        }
    }
}

/// Business identifier code of an iDEAL bank.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[allow(clippy::upper_case_acronyms)]
pub enum IdealBic {
    ABNANL2A,
    ASNBNL21,
    BUNQNL2A,
    FVLBNL22,
    HANDNL2A,
    INGBNL2A,
    KNABNL2H,
    MOYONL21,
    RABONL2U,
    RBRBNL21,
    SNSBNL2A,
    TRIONL2U,
}
