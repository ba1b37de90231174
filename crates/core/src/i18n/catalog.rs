//! Fixed bilingual message pairs shown to employees.

use crate::domain::leave::NewLeaveApplication;
use crate::i18n::responder::BilingualPair;

pub static INVALID_LEAVE_TYPE: BilingualPair = BilingualPair::fixed(
    "Invalid leave type. Please choose a valid type.",
    "অবৈধ ছুটির ধরন। অনুগ্রহ করে একটি বৈধ ধরন বেছে নিন।",
);

pub static INVALID_DATE_FORMAT: BilingualPair = BilingualPair::fixed(
    "Invalid date format. Please use DD/MM/YYYY or YYYY-MM-DD.",
    "অবৈধ তারিখ ফরম্যাট। অনুগ্রহ করে DD/MM/YYYY অথবা YYYY-MM-DD ব্যবহার করুন।",
);

pub static REASON_TOO_SHORT: BilingualPair = BilingualPair::fixed(
    "Please provide a short reason for your leave.",
    "অনুগ্রহ করে আপনার ছুটির একটি সংক্ষিপ্ত কারণ লিখুন।",
);

pub static INVALID_LEAVE_DAYS: BilingualPair = BilingualPair::fixed(
    "❌ Enter a valid number of leave days (1–365).",
    "❌ ছুটির দিনের একটি বৈধ সংখ্যা লিখুন (১–৩৬৫)।",
);

pub static SUBMISSION_UNAVAILABLE: BilingualPair = BilingualPair::fixed(
    "Sorry, we could not save your leave application right now. Please try again later.",
    "দুঃখিত, এই মুহূর্তে আপনার ছুটির আবেদন সংরক্ষণ করা যায়নি। অনুগ্রহ করে পরে আবার চেষ্টা করুন।",
);

pub static REQUEST_NOT_PROCESSED: BilingualPair = BilingualPair::fixed(
    "The request could not be processed. Check inputs and try again.",
    "অনুরোধটি প্রক্রিয়া করা যায়নি। তথ্য যাচাই করে আবার চেষ্টা করুন।",
);

pub static INTERNAL_ERROR: BilingualPair = BilingualPair::fixed(
    "An unexpected internal error occurred.",
    "একটি অপ্রত্যাশিত অভ্যন্তরীণ ত্রুটি ঘটেছে।",
);

pub fn submission_confirmation(application: &NewLeaveApplication) -> BilingualPair {
    let NewLeaveApplication { leave_type, start_date, end_date, reason, leave_days } = application;

    BilingualPair::new(
        format!(
            "✅ Leave request submitted!\nType: {leave_type}\nFrom: {start_date} To: {end_date}\nDays: {leave_days}\nReason: {reason}"
        ),
        format!(
            "✅ ছুটির আবেদন জমা হয়েছে!\nধরন: {leave_type}\nশুরু: {start_date} শেষ: {end_date}\nদিন: {leave_days}\nকারণ: {reason}"
        ),
    )
}
