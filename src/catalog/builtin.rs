//! Built-in FirstBank site catalog.
//!
//! The content the public site ships with: personal, business, digital, and
//! investment banking pages, support pages, and account entry points.

use super::traits::DocumentSource;
use crate::error::CatalogResult;
use crate::models::{DocumentKind, IndexedDocument};
use chrono::NaiveDate;

/// Document source for the built-in site content.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    /// Create the built-in catalog source.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for BuiltinCatalog {
    fn load(&self) -> CatalogResult<Vec<IndexedDocument>> {
        Ok(builtin_documents())
    }

    fn name(&self) -> &str {
        "builtin"
    }
}

fn updated_on(doc: IndexedDocument, year: i32, month: u32, day: u32) -> IndexedDocument {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => doc.with_last_updated(date),
        None => doc,
    }
}

/// All built-in documents, in catalog order.
pub fn builtin_documents() -> Vec<IndexedDocument> {
    vec![
        updated_on(
            IndexedDocument::new(
                "personal-banking",
                "Personal Banking",
                "Personal banking services including savings accounts, current accounts, student accounts, debit cards, credit cards, personal loans, home loans, auto loans, mobile banking, internet banking",
                "/personal-banking",
                DocumentKind::Page,
                "Banking Services",
                &["personal", "banking", "accounts", "savings", "current", "student", "cards", "loans", "mobile", "internet"],
            )
            .with_description("Comprehensive personal banking solutions for all your financial needs"),
            2024,
            1,
            15,
        ),
        IndexedDocument::new(
            "savings-account",
            "FirstSave Account",
            "Savings account with competitive interest rates, no minimum balance, mobile banking access, ATM access, online banking, SMS alerts. Earn 3.5% interest rate with no monthly fees.",
            "/personal-banking/accounts",
            DocumentKind::Product,
            "Accounts",
            &["savings", "account", "interest", "mobile", "banking", "ATM", "online", "SMS", "alerts", "firstsave"],
        )
        .with_description("High-yield savings account with competitive rates and no fees"),
        IndexedDocument::new(
            "current-account",
            "FirstCurrent Account",
            "Current account with checkbook, overdraft facility, business banking tools, priority support. 0.5% interest rate with comprehensive business features.",
            "/personal-banking/accounts",
            DocumentKind::Product,
            "Accounts",
            &["current", "account", "checkbook", "overdraft", "business", "tools", "priority", "support", "firstcurrent"],
        )
        .with_description("Feature-rich current account for everyday banking needs"),
        IndexedDocument::new(
            "student-account",
            "FirstStudent Account",
            "Student account with no monthly fees, student discounts, educational resources. 2.0% interest rate designed specifically for students.",
            "/personal-banking/accounts",
            DocumentKind::Product,
            "Accounts",
            &["student", "account", "no", "fees", "discounts", "educational", "resources", "firststudent"],
        )
        .with_description("Special banking account designed for students with exclusive benefits"),
        IndexedDocument::new(
            "credit-cards",
            "Credit Cards",
            "FirstCredit Classic and Premium credit cards with 0% intro APR, rewards program, fraud protection, travel insurance, airport lounge access, concierge service",
            "/personal-banking/cards",
            DocumentKind::Product,
            "Cards",
            &["credit", "cards", "rewards", "travel", "insurance", "lounge", "access", "concierge", "fraud", "protection", "firstcredit"],
        )
        .with_description("Premium credit cards with exclusive benefits and rewards"),
        IndexedDocument::new(
            "debit-cards",
            "Debit Cards",
            "FirstCard Classic and Gold debit cards with contactless payment, global acceptance, online shopping, higher limits, travel insurance, purchase protection",
            "/personal-banking/cards",
            DocumentKind::Product,
            "Cards",
            &["debit", "cards", "contactless", "global", "acceptance", "online", "shopping", "travel", "insurance", "firstcard"],
        )
        .with_description("Secure debit cards for convenient everyday transactions"),
        IndexedDocument::new(
            "personal-loans",
            "Personal Loans",
            "Personal loans with quick approval, flexible repayment, no collateral required. Starting from 12.5% interest rate up to $50,000 for up to 5 years.",
            "/personal-banking/loans",
            DocumentKind::Product,
            "Loans",
            &["personal", "loans", "quick", "approval", "flexible", "repayment", "no", "collateral", "interest", "rate"],
        )
        .with_description("Flexible personal loans with competitive rates and quick approval"),
        IndexedDocument::new(
            "home-loans",
            "Home Loans",
            "Home loans with competitive rates, property insurance, tax benefits. Starting from 8.5% interest rate up to $500,000 for up to 30 years.",
            "/personal-banking/loans",
            DocumentKind::Product,
            "Loans",
            &["home", "loans", "mortgage", "property", "insurance", "tax", "benefits", "competitive", "rates"],
        )
        .with_description("Affordable home loans to help you buy your dream home"),
        IndexedDocument::new(
            "auto-loans",
            "Auto Loans",
            "Auto loans with quick processing, flexible tenure, attractive interest rates. Starting from 10.5% for new and used cars up to $100,000 for up to 7 years.",
            "/personal-banking/loans",
            DocumentKind::Product,
            "Loans",
            &["auto", "loans", "car", "vehicle", "quick", "processing", "flexible", "tenure", "new", "used"],
        )
        .with_description("Convenient auto loans for new and used vehicles"),
        IndexedDocument::new(
            "business-banking",
            "Business Banking",
            "Business banking solutions for SME and corporate clients including business accounts, trade finance, business loans, cash management, POS terminals",
            "/business-banking",
            DocumentKind::Page,
            "Business Services",
            &["business", "banking", "SME", "corporate", "trade", "finance", "loans", "cash", "management", "POS"],
        )
        .with_description("Comprehensive business banking solutions for companies of all sizes"),
        IndexedDocument::new(
            "sme-banking",
            "SME Banking",
            "Small and Medium Enterprise banking with business advisory, POS terminals, trade finance, dedicated relationship manager",
            "/business-banking/sme",
            DocumentKind::Service,
            "Business Services",
            &["SME", "small", "medium", "enterprise", "advisory", "POS", "terminals", "trade", "finance", "relationship"],
        )
        .with_description("Specialized banking services for small and medium enterprises"),
        IndexedDocument::new(
            "corporate-banking",
            "Corporate Banking",
            "Corporate banking with dedicated relationship manager, treasury services, international banking, cash management solutions",
            "/business-banking/corporate",
            DocumentKind::Service,
            "Business Services",
            &["corporate", "banking", "treasury", "services", "international", "cash", "management", "dedicated", "relationship"],
        )
        .with_description("Premium corporate banking services for large enterprises"),
        IndexedDocument::new(
            "digital-banking",
            "Digital Banking",
            "Digital banking services including mobile banking app, internet banking, API banking, digital payments, online transactions",
            "/digital-banking",
            DocumentKind::Page,
            "Digital Services",
            &["digital", "banking", "mobile", "app", "internet", "API", "payments", "online", "transactions"],
        )
        .with_description("Modern digital banking solutions for the connected world"),
        IndexedDocument::new(
            "mobile-banking",
            "Mobile Banking App",
            "Mobile banking app with biometric login, mobile check deposit, real-time alerts, card controls, location-based services",
            "/digital-banking/mobile",
            DocumentKind::Service,
            "Digital Services",
            &["mobile", "banking", "app", "biometric", "login", "check", "deposit", "alerts", "card", "controls"],
        )
        .with_description("Full-featured mobile banking app for banking on the go"),
        IndexedDocument::new(
            "internet-banking",
            "Internet Banking",
            "Secure online banking platform with account management, transfers, bill payments, loan applications, investment tracking",
            "/digital-banking/internet",
            DocumentKind::Service,
            "Digital Services",
            &["internet", "banking", "online", "secure", "transfers", "bill", "payments", "loan", "applications"],
        )
        .with_description("Comprehensive online banking platform with advanced features"),
        IndexedDocument::new(
            "investment-wealth",
            "Investment & Wealth Management",
            "Investment and wealth management services including fixed deposits, treasury bills, investment planning, wealth advisory, portfolio management",
            "/investment-wealth",
            DocumentKind::Page,
            "Investment Services",
            &["investment", "wealth", "management", "fixed", "deposits", "treasury", "bills", "planning", "advisory", "portfolio"],
        )
        .with_description("Professional investment and wealth management services"),
        IndexedDocument::new(
            "fixed-deposits",
            "Fixed Deposits",
            "Fixed deposits with competitive interest rates, flexible terms from 30 days to 180 days, secure returns, government backing",
            "/investment-wealth/fixed-deposits",
            DocumentKind::Product,
            "Investment Products",
            &["fixed", "deposits", "competitive", "interest", "rates", "flexible", "terms", "secure", "returns"],
        )
        .with_description("Secure fixed deposit investments with attractive returns"),
        IndexedDocument::new(
            "treasury-bills",
            "Treasury Bills",
            "Government treasury bills with competitive yields, 91-day, 182-day, and 364-day terms, government-backed securities",
            "/investment-wealth/treasury-bills",
            DocumentKind::Product,
            "Investment Products",
            &["treasury", "bills", "government", "securities", "yields", "competitive", "backed", "safe"],
        )
        .with_description("Government-backed treasury bills for secure investments"),
        IndexedDocument::new(
            "customer-support",
            "Customer Support",
            "24/7 customer support with phone support, live chat, email support, branch network, security center, FAQs",
            "/support",
            DocumentKind::Page,
            "Support Services",
            &["customer", "support", "24/7", "phone", "live", "chat", "email", "branch", "network", "security", "FAQs"],
        )
        .with_description("Comprehensive customer support available 24/7"),
        IndexedDocument::new(
            "faqs",
            "Frequently Asked Questions",
            "Common questions about account opening, password reset, banking hours, fees, interest rates, loan applications, card services",
            "/support/faqs",
            DocumentKind::Page,
            "Help & Information",
            &["FAQ", "questions", "answers", "account", "opening", "password", "reset", "banking", "hours", "fees"],
        )
        .with_description("Find quick answers to frequently asked questions"),
        IndexedDocument::new(
            "security-center",
            "Security Center",
            "Banking security information, fraud protection, two-factor authentication, secure login, account protection, security tips",
            "/support/security",
            DocumentKind::Page,
            "Security & Safety",
            &["security", "center", "fraud", "protection", "two-factor", "authentication", "secure", "login", "account"],
        )
        .with_description("Comprehensive security information and protection measures"),
        IndexedDocument::new(
            "about-firstbank",
            "About FirstBank",
            "FirstBank International Limited established in 1894, leading banking services, 130 years of excellence, London headquarters, global presence",
            "/about",
            DocumentKind::Page,
            "Company Information",
            &["about", "firstbank", "international", "limited", "established", "1894", "leading", "banking", "excellence", "London"],
        )
        .with_description("Learn about FirstBank's history and commitment to excellence"),
        IndexedDocument::new(
            "contact-us",
            "Contact Us",
            "Contact FirstBank through phone, email, live chat, branch locations, customer service, support team, business hours",
            "/contact",
            DocumentKind::Page,
            "Contact Information",
            &["contact", "phone", "email", "live", "chat", "branch", "locations", "customer", "service", "support"],
        )
        .with_description("Get in touch with FirstBank through multiple contact channels"),
        IndexedDocument::new(
            "online-banking-login",
            "Online Banking Login",
            "Secure online banking login with two-factor authentication, account access, transaction history, bill payments",
            "https://ebanking.example.com",
            DocumentKind::Navigation,
            "Digital Access",
            &["online", "banking", "login", "secure", "two-factor", "authentication", "account", "access"],
        )
        .with_description("Secure access to your online banking account"),
        IndexedDocument::new(
            "open-account",
            "Open New Account",
            "Open new bank account online, account application, personal information, account types, savings, current, student accounts",
            "https://ebanking.example.com/open-account",
            DocumentKind::Navigation,
            "Account Services",
            &["open", "account", "new", "application", "personal", "information", "savings", "current", "student"],
        )
        .with_description("Start your banking journey by opening a new account"),
    ]
}
