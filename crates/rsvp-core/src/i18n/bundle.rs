//! Static string bundles, one per language.

use serde::Serialize;

use super::Language;
use crate::flow::{AttendingAnswer, FlowNotice};
use crate::ports::errors::SubmissionError;

#[derive(Debug, Serialize)]
pub struct Strings {
    pub landing: LandingStrings,
    pub rsvp: RsvpStrings,
    pub address: AddressStrings,
    pub thanks: ThanksStrings,
    pub errors: ErrorStrings,
    /// Label of the control that switches to the other language.
    pub switch_language: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LandingStrings {
    pub kicker: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub venue: &'static str,
    pub city: &'static str,
    pub invitation: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RsvpStrings {
    pub title: &'static str,
    pub names_prompt: &'static str,
    pub name_placeholder: &'static str,
    pub attending_question: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub sending: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AddressStrings {
    pub title: &'static str,
    pub question: &'static str,
    pub placeholder: &'static str,
    pub submit: &'static str,
    pub sending: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ThanksStrings {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorStrings {
    pub name_required: &'static str,
    pub rsvp_failed: &'static str,
    pub address_failed: &'static str,
    /// Prefix for rejected submissions without a server message; the HTTP
    /// status is appended in parentheses.
    pub submit_failed: &'static str,
    pub dismiss: &'static str,
}

impl Strings {
    /// Render a flow notice.
    ///
    /// A server-provided detail is shown verbatim, so it stays in whatever
    /// language the endpoint answered in.
    pub fn notice(&self, notice: &FlowNotice) -> String {
        match notice {
            FlowNotice::NameRequired => self.errors.name_required.to_string(),
            FlowNotice::SubmissionFailed { error, answer } => match error {
                SubmissionError::Rejected {
                    detail: Some(detail),
                    ..
                } if !detail.trim().is_empty() => detail.clone(),
                SubmissionError::Rejected { status, .. } => {
                    format!("{} ({status})", self.errors.submit_failed)
                }
                SubmissionError::Transport(_) => match answer {
                    AttendingAnswer::No => self.errors.rsvp_failed.to_string(),
                    AttendingAnswer::Yes => self.errors.address_failed.to_string(),
                },
            },
        }
    }
}

pub static EN: Strings = Strings {
    landing: LandingStrings {
        kicker: "We Are Getting Married",
        title: "Anna & Dominic",
        date: "Saturday, August 15th, 2026",
        time: "5:00pm",
        venue: "Baywood Clubhouse",
        city: "Millsboro, Delaware",
        invitation: "We are so excited to celebrate with you. Please RSVP when you can so we can plan accordingly.",
        cta: "Will You Attend",
    },
    rsvp: RsvpStrings {
        title: "RSVP",
        names_prompt: "Please put all names attending below.",
        name_placeholder: "Full Name",
        attending_question: "Do you think you will be attending (If you are not yet sure, please RSVP \"Yes\" for now)?",
        yes: "Yes",
        no: "No",
        sending: "Sending...",
        note: "This is an informal RSVP, we will send an official invitation at a later date.",
    },
    address: AddressStrings {
        title: "Address",
        question: "What address would you like to receive the invitation at?",
        placeholder: "Street, City, State, ZIP",
        submit: "Submit",
        sending: "Sending...",
    },
    thanks: ThanksStrings {
        title: "Thank you!",
        body: "We got your response.",
    },
    errors: ErrorStrings {
        name_required: "Please enter your name first.",
        rsvp_failed: "Something went wrong sending your RSVP.",
        address_failed: "Something went wrong sending your address.",
        submit_failed: "Form submit failed",
        dismiss: "Dismiss",
    },
    switch_language: "한국어",
};

pub static KO: Strings = Strings {
    landing: LandingStrings {
        kicker: "저희 결혼합니다",
        title: "안나 & 도미닉",
        date: "2026년 8월 15일 토요일",
        time: "오후 5시",
        venue: "베이우드 클럽하우스",
        city: "델라웨어주 밀스보로",
        invitation: "함께 축하해 주신다면 정말 기쁘겠습니다. 준비할 수 있도록 편하실 때 참석 여부를 알려주세요.",
        cta: "참석하시나요?",
    },
    rsvp: RsvpStrings {
        title: "참석 여부",
        names_prompt: "참석하시는 모든 분의 성함을 적어주세요.",
        name_placeholder: "성함",
        attending_question: "참석하실 예정인가요? (아직 확실하지 않으시면 우선 \"예\"로 답해 주세요.)",
        yes: "예",
        no: "아니요",
        sending: "보내는 중...",
        note: "비공식 참석 확인이며, 정식 청첩장은 추후에 보내드리겠습니다.",
    },
    address: AddressStrings {
        title: "주소",
        question: "청첩장을 받으실 주소를 알려주세요.",
        placeholder: "도로명, 도시, 주, 우편번호",
        submit: "제출",
        sending: "보내는 중...",
    },
    thanks: ThanksStrings {
        title: "감사합니다!",
        body: "답변을 잘 받았습니다.",
    },
    errors: ErrorStrings {
        name_required: "먼저 성함을 입력해 주세요.",
        rsvp_failed: "참석 여부를 보내는 중 문제가 발생했습니다.",
        address_failed: "주소를 보내는 중 문제가 발생했습니다.",
        submit_failed: "양식 제출에 실패했습니다",
        dismiss: "닫기",
    },
    switch_language: "English",
};

pub fn bundle(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Ko => &KO,
    }
}
