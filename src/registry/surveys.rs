//! Survey info, tie-ons, survey headers and readings

use chrono::Utc;

use super::{ensure_valid, Registry, Result};
use crate::geodetic::qualify_reading;
use crate::storage::Record;
use crate::types::{
    HoleSection, NewSurveyHeader, SurveyDetail, SurveyHeader, SurveyHeaderWithDetails, SurveyInfo,
    SurveyReading, SurveyType, TieOn, Tool,
};

impl Registry {
    /// Store a survey run. Run-in and minimum ID come from the hole section.
    pub fn create_survey_info(&self, mut info: SurveyInfo) -> Result<SurveyInfo> {
        ensure_valid(info.validate())?;
        self.require_job(&info.job_number)?;
        self.require::<Tool>(info.type_of_tool)?;
        self.require::<SurveyType>(info.survey_type)?;
        self.require::<HoleSection>(info.hole_section)?;
        let section = self.get::<HoleSection>(info.hole_section)?;
        info.inherit_from(&section);

        let stored = self.store.table::<SurveyInfo>()?.insert(info)?;
        tracing::info!(table = SurveyInfo::TABLE, id = stored.survey_info_id, "Created survey info");
        Ok(stored)
    }

    pub fn create_tie_on(&self, tie_on: TieOn) -> Result<TieOn> {
        self.require_job(&tie_on.job_number)?;
        let stored = self.store.table::<TieOn>()?.insert(tie_on)?;
        tracing::info!(table = TieOn::TABLE, id = stored.id, "Created tie-on");
        Ok(stored)
    }

    pub fn tie_ons_for_job(&self, job_number: &str) -> Result<Vec<TieOn>> {
        self.get_job(job_number)?;
        Ok(self
            .store
            .table::<TieOn>()?
            .filter(|tie_on| tie_on.job_number == job_number)?)
    }

    /// Open a survey header dated today.
    pub fn create_survey_header(&self, new_header: NewSurveyHeader) -> Result<SurveyHeader> {
        self.require_job(&new_header.job_number)?;
        self.require::<SurveyType>(new_header.survey_type)?;

        let header = new_header.into_header(Utc::now().date_naive());
        let stored = self.store.table::<SurveyHeader>()?.insert(header)?;
        tracing::info!(table = SurveyHeader::TABLE, id = stored.id, "Created survey header");
        Ok(stored)
    }

    pub fn header_with_details(&self, header_id: u64) -> Result<SurveyHeaderWithDetails> {
        let header = self.get::<SurveyHeader>(header_id)?;
        let details = self
            .store
            .table::<SurveyDetail>()?
            .filter(|detail| detail.header == header_id)?;
        Ok(SurveyHeaderWithDetails { header, details })
    }

    /// Store a reading under a header, qualified against the job's latest well.
    pub fn submit_reading(&self, header_id: u64, reading: SurveyReading) -> Result<SurveyDetail> {
        let header = self.get::<SurveyHeader>(header_id)?;
        ensure_valid(reading.validate())?;

        let reference = self.reference_well(&header.job_number)?.derived();
        let qualification = qualify_reading(&reference, reading.g_t, reading.w_t);
        let detail = SurveyDetail::new(&header, reading, qualification);

        let stored = self.store.table::<SurveyDetail>()?.insert(detail)?;
        tracing::info!(
            table = SurveyDetail::TABLE,
            id = stored.id,
            header = header_id,
            status = %stored.status,
            "Recorded survey reading"
        );
        Ok(stored)
    }
}
